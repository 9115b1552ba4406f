pub mod services;
pub mod value_objects;

pub use services::AnchorService;
pub use value_objects::{AnnotationPosition, CssLength, Rect, RowMetric};
