use crate::{
    domain::{
        layout::{AnchorService, AnnotationPosition, RowMetric},
        logging::LogComponent,
        order_book::{Quadrant, Snapshot},
    },
    format_utils::format_size,
    log_warn,
};

/// Render-ready callout for one highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationView {
    pub key: String,
    pub quadrant: Quadrant,
    pub position: AnnotationPosition,
    pub label: &'static str,
    /// `"{SIDE} {size} {SYMBOL}"`
    pub value: String,
    pub detail: &'static str,
    pub factor: &'static str,
}

/// Builds the annotation layer for a snapshot from the latest row metrics.
///
/// Highlights whose order index falls outside the snapshot are skipped.
/// Highlights whose row has no metric are placed at the container center.
pub fn annotate_snapshot(snapshot: &Snapshot, metrics: &[Option<RowMetric>]) -> Vec<AnnotationView> {
    snapshot
        .highlights
        .iter()
        .enumerate()
        .filter_map(|(index, highlight)| {
            let Some(order) = snapshot.order_for(highlight) else {
                log_warn!(
                    LogComponent::Application("Annotations"),
                    "⚠️ {}: highlight '{}' has no order at {}",
                    snapshot.id,
                    highlight.label,
                    highlight.order_index
                );
                return None;
            };

            let metric = AnchorService::metric_for(metrics, highlight.order_index);
            Some(AnnotationView {
                key: format!("{}-{}-{}", snapshot.id, highlight.position, index),
                quadrant: highlight.position,
                position: AnchorService::place(highlight.position, metric),
                label: highlight.label,
                value: format!("{} {} {}", order.side, format_size(order.size), order.symbol),
                detail: highlight.detail,
                factor: order.factor,
            })
        })
        .collect()
}
