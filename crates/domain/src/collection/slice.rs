//! Ordered-sequence adapter.

use tracing::{debug, trace};

use crate::cursor::{Cursor, ItemCollection};
use crate::order::Item;

/// Adapter over an ordered sequence of items, borrowed rather than copied.
#[derive(Debug, Clone, Copy)]
pub struct ItemSlice<'a> {
    items: &'a [Item],
}

impl<'a> ItemSlice<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self { items }
    }

    /// Returns the wrapped items.
    pub fn items(&self) -> &'a [Item] {
        self.items
    }
}

impl<'a> From<&'a [Item]> for ItemSlice<'a> {
    fn from(items: &'a [Item]) -> Self {
        Self::new(items)
    }
}

impl ItemCollection for ItemSlice<'_> {
    type Cursor<'c>
        = SliceCursor<'c>
    where
        Self: 'c;

    fn create_cursor(&self) -> SliceCursor<'_> {
        debug!(len = self.items.len(), "creating slice cursor");
        SliceCursor::new(self.items)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Cursor indexing straight into the borrowed sequence.
///
/// No snapshot is taken: the cursor reads the caller's storage in place.
/// The borrow keeps that storage frozen for the cursor's lifetime.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    items: &'a [Item],
    position: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self { items, position: 0 }
    }
}

impl<'a> Cursor<'a> for SliceCursor<'a> {
    fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn advance(&mut self) -> Option<&'a Item> {
        let items = self.items;
        match items.get(self.position) {
            Some(item) => {
                self.position += 1;
                Some(item)
            }
            None => {
                trace!("slice cursor exhausted, rewinding");
                self.position = 0;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
