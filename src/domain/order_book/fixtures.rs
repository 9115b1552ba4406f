//! Compile-time order book frames shown by the landing page.

use super::entities::{Highlight, Order, Snapshot};
use super::value_objects::{Quadrant, Side};

pub const ORDER_HEADERS: [&str; 5] = ["SIDE", "SYMBOL", "SIZE", "PRICE", "FACTOR"];

pub const TICKER_ITEMS: [&str; 4] = [
    "Factor telemetry online",
    "Order book synced",
    "Latency hedger < 24ms",
    "14 live factor stacks",
];

const fn order(
    id: &'static str,
    side: Side,
    symbol: &'static str,
    price: f64,
    size: u32,
    factor: &'static str,
) -> Order {
    Order { id, side, symbol, price, size, factor }
}

const fn highlight(
    order_index: usize,
    label: &'static str,
    detail: &'static str,
    position: Quadrant,
) -> Highlight {
    Highlight { order_index, label, detail, position }
}

pub static ORDER_SNAPSHOTS: [Snapshot; 3] = [
    Snapshot {
        id: "grid-alpha",
        timestamp: "14:03:18 EST",
        orders: &[
            order("ob-01", Side::Buy, "NQH4", 18943.25, 12, "Volatility compression"),
            order("ob-02", Side::Sell, "CLJ4", 77.18, 35, "Term-structure skew"),
            order("ob-03", Side::Sell, "ZB", 120.156, 22, "Macro carry unwind"),
            order("ob-04", Side::Buy, "RTY", 1956.8, 18, "Reshoring growth impulse"),
            order("ob-05", Side::Buy, "EURUSD", 1.0831, 5, "Flow imbalance"),
            order("ob-06", Side::Sell, "GC", 2145.2, 9, "Haven rotation"),
        ],
        highlights: &[
            highlight(0, "Latency hedge", "Spike damped by compression factor.", Quadrant::LeftTop),
            highlight(3, "Mid-cap uplift", "Domestic reshoring basket.", Quadrant::RightTop),
            highlight(5, "Flight rotation", "Haven bleed-off detected.", Quadrant::RightBottom),
        ],
    },
    Snapshot {
        id: "grid-beta",
        timestamp: "14:03:24 EST",
        orders: &[
            order("ob-07", Side::Sell, "NQH4", 18940.75, 10, "Dealer gamma reset"),
            order("ob-08", Side::Buy, "ZN", 110.203, 27, "Rate volatility cushion"),
            order("ob-09", Side::Buy, "CLJ4", 77.05, 42, "Time-spread inversion"),
            order("ob-10", Side::Sell, "RTY", 1954.6, 15, "Small-cap fatigue"),
            order("ob-11", Side::Buy, "SI", 24.38, 31, "Energy beta bleed"),
            order("ob-12", Side::Sell, "EURUSD", 1.0825, 8, "Dollar funding pulse"),
        ],
        highlights: &[
            highlight(1, "Duration shield", "Rates cushion engages at 18bp.", Quadrant::LeftTop),
            highlight(2, "Crude inversion", "Factor spread crosses signal band.", Quadrant::RightTop),
            highlight(5, "Funding pulse", "Dollar squeeze in motion.", Quadrant::LeftBottom),
        ],
    },
    Snapshot {
        id: "grid-gamma",
        timestamp: "14:03:30 EST",
        orders: &[
            order("ob-13", Side::Buy, "ES", 5211.5, 14, "Earnings drift capture"),
            order("ob-14", Side::Sell, "SI", 24.29, 26, "Cross-metal arb"),
            order("ob-15", Side::Sell, "GC", 2141.6, 7, "Mean reversion coil"),
            order("ob-16", Side::Buy, "ZN", 110.245, 30, "Curve dislocation"),
            order("ob-17", Side::Sell, "RTY", 1950.9, 12, "Liquidity drought"),
            order("ob-18", Side::Buy, "GBPUSD", 1.2664, 6, "Carry-momentum mix"),
        ],
        highlights: &[
            highlight(0, "Drift capture", "Earnings factor flips positive.", Quadrant::LeftTop),
            highlight(3, "Curve rescue", "Dislocation > 1.5σ.", Quadrant::LeftBottom),
            highlight(4, "Liquidity drought", "RTY depth < 20 lots.", Quadrant::RightBottom),
        ],
    },
];

/// Snapshot at `index`, wrapping so any counter value is valid.
pub fn snapshot_at(index: usize) -> &'static Snapshot {
    &ORDER_SNAPSHOTS[index % ORDER_SNAPSHOTS.len()]
}
