use serde::Serialize;

use super::value_objects::{Quadrant, Side};
use crate::domain::errors::{AppError, AppResult};

/// Entity - one resting order shown as a table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: &'static str,
    pub side: Side,
    pub symbol: &'static str,
    pub price: f64,
    pub size: u32,
    pub factor: &'static str,
}

/// Callout attached to the order at `order_index` within the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub order_index: usize,
    pub label: &'static str,
    pub detail: &'static str,
    pub position: Quadrant,
}

/// Entity - one frame of the order book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub orders: &'static [Order],
    pub highlights: &'static [Highlight],
}

impl Snapshot {
    /// Order targeted by a highlight, if the index is in range.
    pub fn order_for(&self, highlight: &Highlight) -> Option<&Order> {
        self.orders.get(highlight.order_index)
    }

    /// Every highlight must point at an existing order.
    pub fn validate(&self) -> AppResult<()> {
        for highlight in self.highlights {
            if self.order_for(highlight).is_none() {
                return Err(AppError::Fixture(format!(
                    "snapshot {} highlight '{}' targets order {} of {}",
                    self.id,
                    highlight.label,
                    highlight.order_index,
                    self.orders.len()
                )));
            }
        }
        Ok(())
    }
}
