pub mod wasm_api;

pub use wasm_api::{default_config_json, snapshot_count, snapshot_json, snapshot_to_json};
