//! Demonstration of cursor-based order totals.
//!
//! Builds a fixed order, wraps its items in both container adapters and
//! prints the price and discount totals computed through each cursor.

pub mod config;

use std::io::Write;

use common::OrderId;
use domain::{Cursor, Item, ItemCollection, ItemMap, ItemSlice, Order, sum_discount, sum_price};

/// Returns the hardcoded order the demo reports on.
pub fn sample_order() -> Order {
    Order::new(
        OrderId::new("24ABCXYZ"),
        vec![
            Item::new("Kem", 50000, 5000),
            Item::new("Bánh", 10000, 0),
            Item::new("Cà phê", 70000, 10000),
        ],
    )
}

/// Writes the price and discount lines for one cursor, rewinding in between.
fn write_totals<'a, W, C>(out: &mut W, cursor: &mut C) -> std::io::Result<()>
where
    W: Write + ?Sized,
    C: Cursor<'a> + ?Sized,
{
    writeln!(out, "Total price: {}", sum_price(cursor))?;
    cursor.reset();
    writeln!(out, "Total discount: {}", sum_discount(cursor))
}

/// Writes the four report lines for `order`: slice totals, then map totals.
pub fn write_report<W: Write + ?Sized>(out: &mut W, order: &Order) -> std::io::Result<()> {
    let slice = ItemSlice::new(order.items());
    write_totals(out, &mut slice.create_cursor())?;

    let map = ItemMap::from_items(order.items());
    if map.len() != slice.len() {
        tracing::warn!(
            order_id = %order.id(),
            items = slice.len(),
            keys = map.len(),
            "duplicate item names collapsed in map view"
        );
    }
    write_totals(out, &mut map.create_cursor())
}

/// Runs the demo against stdout.
pub fn run() -> std::io::Result<()> {
    let order = sample_order();
    tracing::debug!(order_id = %order.id(), items = order.item_count(), "reporting order totals");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &order)?;
    out.flush()
}
