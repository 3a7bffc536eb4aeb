//! Domain layer for order totals.
//!
//! This crate provides:
//! - Order and Item data types
//! - Cursor protocol decoupling traversal from storage
//! - Ordered-sequence and name-keyed container adapters
//! - Aggregations that depend only on the cursor protocol

pub mod aggregation;
pub mod collection;
pub mod cursor;
pub mod error;
pub mod order;

pub use aggregation::{
    OrderTotals, fold_cursor, sum_discount, sum_price, total_discount, total_price,
};
pub use collection::{
    ItemMap, ItemSlice, MapCursor, SliceCursor, index_by_name, try_index_by_name,
};
pub use cursor::{Cursor, ItemCollection};
pub use error::OrderError;
pub use order::{Item, Money, Order};
