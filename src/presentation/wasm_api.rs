use wasm_bindgen::prelude::*;

use crate::config::ConsoleConfig;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    order_book::{ORDER_SNAPSHOTS, Snapshot},
};

/// Number of fixture frames in the rotation.
#[wasm_bindgen(js_name = snapshotCount)]
pub fn snapshot_count() -> usize {
    ORDER_SNAPSHOTS.len()
}

/// Fixture frame `index` as JSON. Unlike the rotation, this does not wrap.
#[wasm_bindgen(js_name = snapshotJson)]
pub fn snapshot_json(index: usize) -> Result<String, JsValue> {
    Ok(snapshot_to_json(index)?)
}

/// Default page configuration as JSON, for hosts that want to override parts of it.
#[wasm_bindgen(js_name = defaultConfigJson)]
pub fn default_config_json() -> Result<String, JsValue> {
    serde_json::to_string(&ConsoleConfig::default())
        .map_err(|e| AppError::Fixture(e.to_string()).into())
}

pub fn snapshot_to_json(index: usize) -> AppResult<String> {
    let snapshot: &Snapshot = ORDER_SNAPSHOTS.get(index).ok_or_else(|| {
        AppError::Fixture(format!("no snapshot {} (have {})", index, ORDER_SNAPSHOTS.len()))
    })?;
    get_logger().debug(
        LogComponent::Presentation("WasmApi"),
        &format!("📤 exporting snapshot {}", snapshot.id),
    );
    serde_json::to_string(snapshot).map_err(|e| AppError::Fixture(e.to_string()))
}
