//! Shared money helpers, errors, and configuration for Salesbook.
//!
//! This crate provides common pieces used across all other crates:
//! - Cent-precision helpers for decimal amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
