//! Aggregations over order items.
//!
//! The cursor-based reducers only see the [`Cursor`] protocol and work the
//! same for every container. None of them rewinds the cursor it is given:
//! call [`Cursor::reset`] between two aggregations over one cursor.

use serde::{Deserialize, Serialize};

use crate::cursor::{Cursor, ItemCollection};
use crate::order::{Item, Money};

/// Folds every remaining item of `cursor` into an accumulator.
pub fn fold_cursor<'a, C, B, F>(cursor: &mut C, init: B, mut f: F) -> B
where
    C: Cursor<'a> + ?Sized,
    F: FnMut(B, &'a Item) -> B,
{
    let mut acc = init;
    while cursor.has_next() {
        if let Some(item) = cursor.advance() {
            acc = f(acc, item);
        }
    }
    acc
}

/// Sums the price of the remaining items. Zero for an exhausted cursor.
pub fn sum_price<'a, C>(cursor: &mut C) -> Money
where
    C: Cursor<'a> + ?Sized,
{
    fold_cursor(cursor, Money::zero(), |total, item| total + item.price())
}

/// Sums the discount of the remaining items. Zero for an exhausted cursor.
pub fn sum_discount<'a, C>(cursor: &mut C) -> Money
where
    C: Cursor<'a> + ?Sized,
{
    fold_cursor(cursor, Money::zero(), |total, item| total + item.discount())
}

/// Direct price total over any item iterator, without a cursor.
pub fn total_price<'a>(items: impl IntoIterator<Item = &'a Item>) -> Money {
    items.into_iter().map(Item::price).sum()
}

/// Direct discount total over any item iterator, without a cursor.
pub fn total_discount<'a>(items: impl IntoIterator<Item = &'a Item>) -> Money {
    items.into_iter().map(Item::discount).sum()
}

/// Price and discount totals of one set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub price: Money,
    pub discount: Money,
}

impl OrderTotals {
    /// Runs both aggregations over one cursor, rewinding it in between.
    ///
    /// The price pass starts from the cursor's current position.
    pub fn from_cursor<'a, C>(cursor: &mut C) -> Self
    where
        C: Cursor<'a> + ?Sized,
    {
        let price = sum_price(cursor);
        cursor.reset();
        let discount = sum_discount(cursor);
        Self { price, discount }
    }

    /// Computes the totals of a container through a fresh cursor.
    pub fn from_collection<T>(collection: &T) -> Self
    where
        T: ItemCollection + ?Sized,
    {
        let mut cursor = collection.create_cursor();
        Self::from_cursor(&mut cursor)
    }

    /// Price minus discount, never below zero.
    pub fn net(&self) -> Money {
        self.price.saturating_sub(self.discount)
    }
}
