//! Integration tests for the completion engine.
//!
//! - Candidate enumeration over the full terminal command tree
//! - Context walks through nested registries

mod candidate_tests;
