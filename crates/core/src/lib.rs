//! Core business logic for Salesbook.
//!
//! This crate contains pure business logic with ZERO file-format or CLI dependencies.
//! All domain types, allocation rules and journal calculations live here.
//!
//! # Modules
//!
//! - `sales` - Sales line items and duplicate aggregation
//! - `allocation` - Largest-remainder commission allocation
//! - `ledger` - Double-entry journal generation and balancing
//! - `session` - Session capability gating generation

pub mod allocation;
pub mod ledger;
pub mod sales;
pub mod session;
