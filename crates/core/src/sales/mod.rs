//! Sales line items and their aggregation by identifier.

pub mod item;

pub use item::{LineItem, aggregate_by_identifier};
