//! Common types used across the application.

pub mod money;

pub use money::{CENT_PLACES, format_cents, is_cent_exact, round_cents};
