//! Shared test utilities for cafe integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod client;
pub mod fixtures;

pub use client::*;
pub use fixtures::*;
