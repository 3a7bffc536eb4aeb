//! Shared types for the order totals workspace.

pub mod types;

pub use types::OrderId;
