//! Shared types, errors, and configuration for Daftar.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and money values with decimal precision
//! - Typed IDs for entries, archived entries, and users
//! - Pagination types for list queries
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
