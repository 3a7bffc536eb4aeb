//! Integration tests for cursor-based order aggregation.
//!
//! These tests run the same aggregations over both container adapters
//! built from one order and check they agree.

use domain::{
    Cursor, Item, ItemCollection, ItemMap, ItemSlice, Money, Order, OrderError, OrderTotals,
    sum_discount, sum_price,
};

/// Helper to create the reference order
fn sample_order() -> Order {
    Order::new(
        "24ABCXYZ",
        vec![
            Item::new("Kem", 50000, 5000),
            Item::new("Bánh", 10000, 0),
            Item::new("Cà phê", 70000, 10000),
        ],
    )
}

mod end_to_end {
    use super::*;

    #[test]
    fn slice_and_map_totals_for_sample_order() {
        let order = sample_order();

        let slice = ItemSlice::new(order.items());
        let mut cursor = slice.create_cursor();
        assert_eq!(sum_price(&mut cursor), Money::new(130000));
        cursor.reset();
        assert_eq!(sum_discount(&mut cursor), Money::new(15000));

        let map = ItemMap::from_items(order.items());
        let mut cursor = map.create_cursor();
        assert_eq!(sum_price(&mut cursor), Money::new(130000));
        cursor.reset();
        assert_eq!(sum_discount(&mut cursor), Money::new(15000));
    }

    #[test]
    fn adapters_agree_for_unique_names() {
        let orders = [
            sample_order(),
            Order::new("ONE", vec![Item::new("Trà", 15000, 1000)]),
            Order::new(
                "MANY",
                (1..=20)
                    .map(|n| Item::new(format!("Item {n}"), n * 1000, n * 10))
                    .collect(),
            ),
        ];

        for order in &orders {
            let slice = ItemSlice::new(order.items());
            let map = ItemMap::from_items(order.items());
            assert_eq!(slice.len(), map.len(), "order {}", order.id());

            assert_eq!(
                sum_price(&mut slice.create_cursor()),
                sum_price(&mut map.create_cursor()),
                "order {}",
                order.id()
            );
            assert_eq!(
                OrderTotals::from_collection(&slice),
                OrderTotals::from_collection(&map),
                "order {}",
                order.id()
            );
        }
    }
}

mod cursor_reuse {
    use super::*;

    fn assert_reset_reproduces_total<'a>(cursor: &mut dyn Cursor<'a>) {
        let first = sum_price(cursor);
        cursor.reset();
        let second = sum_price(cursor);
        assert_eq!(first, second);
    }

    #[test]
    fn reset_reproduces_total_for_both_adapters() {
        let order = sample_order();
        let slice = ItemSlice::new(order.items());
        let map = ItemMap::from_items(order.items());

        assert_reset_reproduces_total(&mut slice.create_cursor());
        assert_reset_reproduces_total(&mut map.create_cursor());
    }

    #[test]
    fn reset_mid_pass_restarts_from_first_item() {
        let order = sample_order();
        let slice = ItemSlice::new(order.items());
        let mut cursor = slice.create_cursor();

        cursor.advance();
        cursor.advance();
        cursor.reset();
        assert_eq!(sum_price(&mut cursor), Money::new(130000));
    }

    #[test]
    fn advance_after_exhaustion_rewinds_to_start() {
        let order = sample_order();
        let map = ItemMap::from_items(order.items());
        let mut cursor = map.create_cursor();

        sum_discount(&mut cursor);
        assert!(!cursor.has_next());

        assert!(cursor.advance().is_none());
        assert_eq!(cursor.position(), 0);
        assert!(cursor.has_next());
    }
}

mod empty_input {
    use super::*;

    #[test]
    fn empty_containers_sum_to_zero() {
        let order = Order::new("EMPTY", Vec::new());
        let slice = ItemSlice::new(order.items());
        let map = ItemMap::from_items(order.items());

        assert_eq!(OrderTotals::from_collection(&slice), OrderTotals::default());
        assert_eq!(OrderTotals::from_collection(&map), OrderTotals::default());
    }

    #[test]
    fn advance_on_empty_cursor_stays_at_zero() {
        let map = ItemMap::default();
        let mut cursor = map.create_cursor();

        assert!(cursor.advance().is_none());
        assert!(cursor.advance().is_none());
        assert_eq!(cursor.position(), 0);
    }
}

mod duplicate_names {
    use super::*;

    fn duplicated() -> Vec<Item> {
        vec![Item::new("X", 100, 10), Item::new("X", 300, 30)]
    }

    #[test]
    fn map_keeps_only_the_later_item() {
        let items = duplicated();
        let map = ItemMap::from_items(&items);

        assert_eq!(map.len(), 1);
        assert_eq!(sum_price(&mut map.create_cursor()), Money::new(300));
        assert_eq!(sum_discount(&mut map.create_cursor()), Money::new(30));

        // The sequence still sees both.
        let slice = ItemSlice::new(&items);
        assert_eq!(sum_price(&mut slice.create_cursor()), Money::new(400));
    }

    #[test]
    fn strict_construction_reports_the_name() {
        let err = ItemMap::try_from_items(&duplicated()).unwrap_err();
        assert!(matches!(err, OrderError::DuplicateItemName { ref name } if name == "X"));
    }
}
