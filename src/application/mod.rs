pub mod annotations;
pub mod rotation;

pub use annotations::{AnnotationView, annotate_snapshot};
pub use rotation::SnapshotRotation;
