//! API Module
//!
//! HTTP handlers and routing for the coffee service.
//!
//! # Endpoints
//! - `GET /coffees` - Stream every stored record as server-sent events
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
