//! Property-based tests
//!
//! Use proptest to generate random inputs and verify properties

mod token_proptest;
