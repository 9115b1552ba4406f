use derive_more::{Constructor, Display};
use serde::Serialize;

/// Value Object - axis-aligned rectangle in viewport pixels (mirror of `DOMRect`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Row geometry relative to the scene container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowMetric {
    pub center_y: f64,
    pub left_anchor: f64,
    pub right_anchor: f64,
}

impl RowMetric {
    pub fn from_rects(row: &Rect, container: &Rect) -> Self {
        Self {
            center_y: row.center_y() - container.top,
            left_anchor: row.left - container.left,
            right_anchor: row.right() - container.left,
        }
    }
}

/// CSS length emitted into inline `top`/`left` styles.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum CssLength {
    #[display(fmt = "{}px", _0)]
    Px(f64),
    #[display(fmt = "{}%", _0)]
    Percent(f64),
}

/// Absolute placement of a callout inside the scene container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationPosition {
    pub top: CssLength,
    pub left: CssLength,
}

impl AnnotationPosition {
    /// Used whenever the target row has not been measured.
    pub const CENTERED: Self =
        Self { top: CssLength::Percent(50.0), left: CssLength::Percent(50.0) };

    pub fn is_centered(&self) -> bool {
        *self == Self::CENTERED
    }
}

impl Default for AnnotationPosition {
    fn default() -> Self {
        Self::CENTERED
    }
}
