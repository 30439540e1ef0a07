//! Integration tests

pub mod http_dictionary_tests;
