//! Coffee Stream - seeds a Redis keyspace and streams it back over HTTP
//!
//! Flushes the store on startup, writes ten coffee records, and serves
//! them as a paced server-sent event stream.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod stream;

pub use api::AppState;
pub use config::Config;
pub use seed::seed;
