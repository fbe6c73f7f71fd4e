//! Edge case tests for cpplex
