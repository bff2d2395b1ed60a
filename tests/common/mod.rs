//! Common test utilities for sasskit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus a fake compiler script
//! - Fixtures: Fake compiler scripts and config snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
