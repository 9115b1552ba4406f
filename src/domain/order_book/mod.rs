pub mod entities;
pub mod fixtures;
pub mod value_objects;

pub use entities::{Highlight, Order, Snapshot};
pub use fixtures::{ORDER_HEADERS, ORDER_SNAPSHOTS, TICKER_ITEMS, snapshot_at};
pub use value_objects::{Quadrant, Side};
