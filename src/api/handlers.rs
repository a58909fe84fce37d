//! API Handlers
//!
//! HTTP request handlers for the coffee service endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::{Stream, StreamExt};

use crate::config::{Config, StoreBackend};
use crate::error::{Result, StoreError};
use crate::models::HealthResponse;
use crate::store::{MemoryStore, RedisStore, SharedStore};
use crate::stream::coffee_stream;

/// Application state shared across all handlers.
///
/// Holds the store handle shared with the seeder and the pacing of the
/// record stream.
#[derive(Clone)]
pub struct AppState {
    /// Store shared by every request
    pub store: SharedStore,
    /// Delay between streamed records
    pub stream_delay: Duration,
}

impl AppState {
    /// Creates a new AppState around an existing store.
    pub fn new(store: SharedStore, stream_delay: Duration) -> Self {
        Self {
            store,
            stream_delay,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to the configured backend; a Redis connection failure is
    /// returned to the caller.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store: SharedStore = match config.backend {
            StoreBackend::Redis => {
                Arc::new(RedisStore::connect(&config.redis_url, config.store_timeout()).await?)
            }
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        Ok(Self::new(store, config.stream_delay()))
    }
}

/// Handler for GET /coffees
///
/// Streams every stored record as a server-sent event, one JSON object
/// per `data:` frame, paced by the configured delay. Fails with an error
/// body only if the initial key listing fails; later failures end the
/// event stream.
pub async fn coffees_handler(
    State(state): State<AppState>,
) -> Result<Sse<impl Stream<Item = std::result::Result<Event, StoreError>>>> {
    let coffees = coffee_stream(state.store.clone(), state.stream_delay).await?;

    let events = coffees.map(|item| -> std::result::Result<Event, StoreError> {
        let coffee = item?;
        Ok(Event::default().data(coffee.to_json()?))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
