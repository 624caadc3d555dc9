//! Shared test utilities for the roster workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`roster`]: [`TestRoster`](roster::TestRoster), a temporary data
//!   directory with a file-backed repository

pub mod roster;

pub use roster::TestRoster;
