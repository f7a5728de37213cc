//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - Database fixture backed by a temporary SQLite file
//! - Authentication helpers (users, tokens, headers)
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
