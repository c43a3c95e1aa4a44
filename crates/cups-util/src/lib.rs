//! Shared utilities for cups.
//!
//! This crate provides cross-cutting concerns used by the other cups crates:
//! the error type and a few filesystem helpers.

pub mod errors;
pub mod fs;
