//! Domain and response models for the coffee service
//!
//! `Coffee` is the stored record; the response DTOs shape the
//! non-streaming HTTP bodies.

pub mod coffee;
pub mod responses;

// Re-export commonly used types
pub use coffee::Coffee;
pub use responses::{ErrorResponse, HealthResponse};
