//! Unit tests

pub mod validation_tests;
