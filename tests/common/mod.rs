//! Common test utilities for telegraf-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated source/destination directories plus helpers to run
//!   the binary
//! - Fixtures: Reusable artifact content and configuration snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
