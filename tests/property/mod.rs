//! Property-based tests

pub mod game_rules;
