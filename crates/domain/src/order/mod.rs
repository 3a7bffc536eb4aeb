//! Order and line item types.

mod value_objects;

pub use value_objects::{Item, Money};

use common::OrderId;
use serde::{Deserialize, Serialize};

/// An order grouping its line items in the sequence they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<Item>,
}

impl Order {
    /// Creates an order owning the given items.
    pub fn new(id: impl Into<OrderId>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the items in order sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
