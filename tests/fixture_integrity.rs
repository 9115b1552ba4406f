use std::collections::HashSet;

use factor_console_wasm::domain::order_book::{ORDER_HEADERS, ORDER_SNAPSHOTS, TICKER_ITEMS, snapshot_at};
use factor_console_wasm::presentation::{snapshot_count, snapshot_to_json};

#[test]
fn every_highlight_targets_an_existing_order() {
    for snapshot in &ORDER_SNAPSHOTS {
        snapshot.validate().unwrap();
        for highlight in snapshot.highlights {
            assert!(
                highlight.order_index < snapshot.orders.len(),
                "{} / {}",
                snapshot.id,
                highlight.label
            );
        }
    }
}

#[test]
fn fixture_shape() {
    assert_eq!(snapshot_count(), 3);
    for snapshot in &ORDER_SNAPSHOTS {
        assert_eq!(snapshot.orders.len(), 6, "{}", snapshot.id);
        assert_eq!(snapshot.highlights.len(), 3, "{}", snapshot.id);
    }
    assert_eq!(ORDER_HEADERS.len(), 5);
    assert_eq!(TICKER_ITEMS.len(), 4);
}

#[test]
fn order_ids_are_unique_across_snapshots() {
    let ids: Vec<_> = ORDER_SNAPSHOTS.iter().flat_map(|s| s.orders.iter().map(|o| o.id)).collect();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn snapshot_at_wraps() {
    assert_eq!(snapshot_at(3).id, "grid-alpha");
    assert_eq!(snapshot_at(5).id, "grid-gamma");
}

#[test]
fn json_export_uses_wire_names() {
    let json: serde_json::Value = serde_json::from_str(&snapshot_to_json(1).unwrap()).unwrap();
    assert_eq!(json["id"], "grid-beta");
    assert_eq!(json["orders"][0]["side"], "SELL");
    assert_eq!(json["highlights"][2]["position"], "left-bottom");
    assert_eq!(json["highlights"][2]["order_index"], 5);
}

#[test]
fn json_export_rejects_missing_snapshot() {
    let err = snapshot_to_json(7).unwrap_err();
    assert!(err.to_string().contains("no snapshot 7"));
}
