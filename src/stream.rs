//! Timed record stream
//!
//! Turns a snapshot of the keyspace into a stream that yields one record
//! per `delay`. Dropping the stream cancels whatever delay or fetch is
//! pending; nothing runs in the background.

use std::time::Duration;

use async_stream::stream;
use futures::Stream;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Coffee;
use crate::store::{SharedStore, MATCH_ALL};

/// Lists every key, then streams the matching records one per `delay`.
///
/// The key listing completes before this returns, so listing failures
/// surface here rather than inside the stream. Records are yielded in
/// listing order. A key whose record has disappeared is skipped without
/// waiting. A store failure while fetching ends the stream with that error.
pub async fn coffee_stream(
    store: SharedStore,
    delay: Duration,
) -> Result<impl Stream<Item = Result<Coffee>>> {
    let keys = store.keys(MATCH_ALL).await?;
    debug!("Streaming {} keys", keys.len());

    Ok(stream! {
        for key in keys {
            match store.get(&key).await {
                Ok(Some(coffee)) => {
                    tokio::time::sleep(delay).await;
                    yield Ok(coffee);
                }
                Ok(None) => {
                    debug!("Key {} vanished before it was read", key);
                }
                Err(e) => {
                    warn!("Stream aborted while reading {}: {}", key, e);
                    yield Err(e);
                    break;
                }
            }
        }
    })
}
