use crate::application::SnapshotRotation;
use crate::domain::layout::RowMetric;
use crate::global_signals;
use leptos::*;
use once_cell::sync::OnceCell;

/// Page-wide reactive state shared by the scene components.
pub struct Globals {
    pub rotation: RwSignal<SnapshotRotation>,
    pub row_metrics: RwSignal<Vec<Option<RowMetric>>>,
    pub display_time: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        rotation: create_rw_signal(SnapshotRotation::over_fixtures()),
        row_metrics: create_rw_signal(Vec::new()),
        display_time: create_rw_signal(String::new()),
    })
}

global_signals! {
    pub rotation => rotation: SnapshotRotation,
    pub row_metrics => row_metrics: Vec<Option<RowMetric>>,
    pub display_time => display_time: String,
}
