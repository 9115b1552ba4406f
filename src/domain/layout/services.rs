use super::value_objects::{AnnotationPosition, CssLength, Rect, RowMetric};
use crate::domain::order_book::Quadrant;

/// Domain service that turns measured rectangles into callout anchors.
pub struct AnchorService;

impl AnchorService {
    /// One entry per row. An unmounted container yields no metrics at all,
    /// an unmounted row yields `None` in its slot.
    pub fn measure_rows(container: Option<&Rect>, rows: &[Option<Rect>]) -> Vec<Option<RowMetric>> {
        let Some(container) = container else {
            return Vec::new();
        };
        rows.iter()
            .map(|row| row.as_ref().map(|rect| RowMetric::from_rects(rect, container)))
            .collect()
    }

    /// Looks up the metric for `row_index`, treating out-of-range as unmeasured.
    pub fn metric_for(metrics: &[Option<RowMetric>], row_index: usize) -> Option<&RowMetric> {
        metrics.get(row_index).and_then(Option::as_ref)
    }

    /// Left quadrants hang from the row's left edge, right quadrants from its right edge.
    pub fn place(quadrant: Quadrant, metric: Option<&RowMetric>) -> AnnotationPosition {
        match metric {
            Some(metric) => {
                let anchor =
                    if quadrant.is_left() { metric.left_anchor } else { metric.right_anchor };
                AnnotationPosition { top: CssLength::Px(metric.center_y), left: CssLength::Px(anchor) }
            }
            None => AnnotationPosition::CENTERED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect { top: 100.0, left: 40.0, width: 900.0, height: 600.0 };

    #[test]
    fn metric_is_relative_to_container() {
        let row = Rect::new(220.0, 90.0, 500.0, 30.0);
        let metrics = AnchorService::measure_rows(Some(&CONTAINER), &[Some(row)]);
        assert_eq!(
            metrics,
            vec![Some(RowMetric { center_y: 135.0, left_anchor: 50.0, right_anchor: 550.0 })]
        );
    }

    #[test]
    fn missing_container_drops_all_metrics() {
        let row = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(AnchorService::measure_rows(None, &[Some(row), None]).is_empty());
    }

    #[test]
    fn missing_row_keeps_its_slot() {
        let row = Rect::new(200.0, 40.0, 100.0, 20.0);
        let metrics = AnchorService::measure_rows(Some(&CONTAINER), &[None, Some(row)]);
        assert_eq!(metrics.len(), 2);
        assert!(metrics[0].is_none());
        assert!(metrics[1].is_some());
    }

    #[test]
    fn quadrant_selects_anchor_side() {
        let metric = RowMetric { center_y: 12.5, left_anchor: 30.0, right_anchor: 480.0 };
        let left = AnchorService::place(Quadrant::LeftBottom, Some(&metric));
        let right = AnchorService::place(Quadrant::RightTop, Some(&metric));
        assert_eq!(left.left, CssLength::Px(30.0));
        assert_eq!(right.left, CssLength::Px(480.0));
        assert_eq!(right.top, CssLength::Px(12.5));
    }

    #[test]
    fn unmeasured_row_is_centered() {
        assert!(AnchorService::place(Quadrant::RightBottom, None).is_centered());
        assert!(AnchorService::metric_for(&[], 3).is_none());
    }
}
