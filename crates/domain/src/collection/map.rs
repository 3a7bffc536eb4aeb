//! Key-based adapter and the helpers that build its mapping.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::cursor::{Cursor, ItemCollection};
use crate::error::OrderError;
use crate::order::Item;

/// Builds a name-keyed mapping from a sequence of items.
///
/// When two items share a name the later one replaces the earlier one.
/// Use [`try_index_by_name`] where duplicates must not be dropped.
#[tracing::instrument(level = "debug", skip_all, fields(len = items.len()))]
pub fn index_by_name(items: &[Item]) -> HashMap<String, Item> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        if let Some(replaced) = index.insert(item.name().to_string(), item.clone()) {
            debug!(
                name = replaced.name(),
                dropped_price = %replaced.price(),
                "duplicate item name, keeping the later item"
            );
        }
    }
    index
}

/// Builds a name-keyed mapping, rejecting duplicate names.
#[tracing::instrument(level = "debug", skip_all, fields(len = items.len()))]
pub fn try_index_by_name(items: &[Item]) -> Result<HashMap<String, Item>, OrderError> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        match index.entry(item.name().to_string()) {
            Entry::Occupied(entry) => {
                return Err(OrderError::DuplicateItemName {
                    name: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(item.clone());
            }
        }
    }
    Ok(index)
}

/// Adapter over a name-to-item lookup structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMap {
    items: HashMap<String, Item>,
}

impl ItemMap {
    pub fn new(items: HashMap<String, Item>) -> Self {
        Self { items }
    }

    /// Indexes `items` by name with last-write-wins on duplicates.
    pub fn from_items(items: &[Item]) -> Self {
        Self::new(index_by_name(items))
    }

    /// Indexes `items` by name, failing on the first duplicate.
    pub fn try_from_items(items: &[Item]) -> Result<Self, OrderError> {
        try_index_by_name(items).map(Self::new)
    }

    /// Looks an item up by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn items(&self) -> &HashMap<String, Item> {
        &self.items
    }
}

impl From<HashMap<String, Item>> for ItemMap {
    fn from(items: HashMap<String, Item>) -> Self {
        Self::new(items)
    }
}

impl ItemCollection for ItemMap {
    type Cursor<'c>
        = MapCursor<'c>
    where
        Self: 'c;

    fn create_cursor(&self) -> MapCursor<'_> {
        debug!(len = self.items.len(), "creating map cursor");
        MapCursor::new(&self.items)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Cursor over a snapshot of the mapping's keys.
///
/// The key set is captured and sorted at creation, which fixes the
/// traversal order for any given set of names. Each step looks its key up
/// in the mapping again.
#[derive(Debug, Clone)]
pub struct MapCursor<'a> {
    items: &'a HashMap<String, Item>,
    keys: Vec<&'a str>,
    position: usize,
}

impl<'a> MapCursor<'a> {
    pub fn new(items: &'a HashMap<String, Item>) -> Self {
        let mut keys: Vec<&'a str> = items.keys().map(String::as_str).collect();
        keys.sort_unstable();
        Self {
            items,
            keys,
            position: 0,
        }
    }

    /// Returns the key snapshot in traversal order.
    pub fn keys(&self) -> &[&'a str] {
        &self.keys
    }
}

impl<'a> Cursor<'a> for MapCursor<'a> {
    fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn advance(&mut self) -> Option<&'a Item> {
        let Some(key) = self.keys.get(self.position).copied() else {
            trace!("map cursor exhausted, rewinding");
            self.position = 0;
            return None;
        };
        let items = self.items;
        self.position += 1;
        items.get(key)
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
