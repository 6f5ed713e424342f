//! Shared utilities.
//!
//! Test helpers shared across module test suites.

pub mod testutil;
