//! Integration tests for uiu.
//!
//! This module contains integration tests organized by feature:
//!
//! - `fixtures` - Test helpers for isolated working directories
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration loading and merging tests
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod cli_tests;
pub mod config_tests;
pub mod fixtures;
