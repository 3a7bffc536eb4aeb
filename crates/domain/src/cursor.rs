//! Cursor protocol shared by every item container.
//!
//! A cursor is a single-pass traversal handle over the items of one
//! container. Aggregations are written against [`Cursor`] only, so they run
//! unchanged over any [`ItemCollection`] implementation.
//!
//! ```text
//! ItemSlice ──┐                    ┌──► sum_price
//!             ├──► create_cursor ──┤
//! ItemMap ────┘                    └──► sum_discount
//! ```

use crate::order::Item;

/// Traversal handle with a position in `[0, len]`.
///
/// `len` is fixed when the cursor is created. Cursors are single-writer and
/// carry no synchronization.
pub trait Cursor<'a> {
    /// Returns the current position.
    fn position(&self) -> usize;

    /// Returns the number of items this cursor walks over.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true while `position < len`. Has no side effect.
    fn has_next(&self) -> bool {
        self.position() < self.len()
    }

    /// Returns the item at the current position and moves past it.
    ///
    /// Once the cursor is exhausted this returns `None` and rewinds the
    /// position to 0, so the next call starts a fresh pass. A `None` alone
    /// therefore does not tell "just ended" from "was reset"; check
    /// [`has_next`](Cursor::has_next) first when order matters.
    fn advance(&mut self) -> Option<&'a Item>;

    /// Rewinds the position to 0. Idempotent.
    fn reset(&mut self);
}

/// A container that hands out cursors over its items.
pub trait ItemCollection {
    /// Cursor type borrowing this container's storage.
    type Cursor<'c>: Cursor<'c>
    where
        Self: 'c;

    /// Creates a cursor positioned at the first item.
    fn create_cursor(&self) -> Self::Cursor<'_>;

    /// Returns the number of items in the container.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
