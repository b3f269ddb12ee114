pub mod point;
pub mod requests;

// Re-export commonly used types
pub use point::{Bounds, FieldViolation, PayloadRejection, Point, Violation};
pub use requests::{ErrorBody, ProcessResponse};
