//! Container adapters over the two item storage representations.

mod map;
mod slice;

pub use map::{ItemMap, MapCursor, index_by_name, try_index_by_name};
pub use slice::{ItemSlice, SliceCursor};
