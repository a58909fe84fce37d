//! Redis Store
//!
//! Store client backed by a Redis server through a multiplexed
//! `ConnectionManager`. Every command is bounded by a timeout.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{Client, RedisResult};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::models::Coffee;
use crate::store::CoffeeStore;

// == Redis Store ==
/// [`CoffeeStore`] over a single multiplexed Redis connection.
///
/// Cloning is cheap; all clones pipeline over the same connection, which
/// the manager re-establishes after a disconnect.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    timeout: Duration,
}

impl RedisStore {
    // == Constructor ==
    /// Connects to the server at `url`.
    ///
    /// # Arguments
    /// * `url` - Redis URI, e.g. `redis://:password@host:6379/0`
    /// * `timeout` - Upper bound for connecting and for each command
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::open(url).map_err(|e| StoreError::Connection(e.to_string()))?;

        let conn = match tokio::time::timeout(timeout, ConnectionManager::new(client)).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(e)) => return Err(StoreError::Connection(e.to_string())),
            Err(_) => {
                return Err(StoreError::Timeout {
                    operation: "CONNECT",
                    timeout,
                })
            }
        };

        info!("Connected to Redis at {}", redacted(url));
        Ok(Self { conn, timeout })
    }
}

#[async_trait]
impl CoffeeStore for RedisStore {
    async fn flush_all(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        bounded(
            self.timeout,
            "FLUSHALL",
            redis::cmd("FLUSHALL").query_async::<_, ()>(&mut conn),
        )
        .await
    }

    async fn set(&self, coffee: &Coffee) -> Result<()> {
        let payload = coffee.to_json()?;
        let mut conn = self.conn.clone();
        bounded(
            self.timeout,
            "SET",
            redis::cmd("SET")
                .arg(&coffee.id)
                .arg(payload)
                .query_async::<_, ()>(&mut conn),
        )
        .await
    }

    async fn get(&self, key: &str) -> Result<Option<Coffee>> {
        let mut conn = self.conn.clone();
        let payload = bounded(
            self.timeout,
            "GET",
            redis::cmd("GET")
                .arg(key)
                .query_async::<_, Option<String>>(&mut conn),
        )
        .await?;

        match payload {
            Some(payload) => Ok(Some(Coffee::from_json(&payload)?)),
            None => {
                debug!("GET {} returned no value", key);
                Ok(None)
            }
        }
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        bounded(
            self.timeout,
            "KEYS",
            redis::cmd("KEYS")
                .arg(pattern)
                .query_async::<_, Vec<String>>(&mut conn),
        )
        .await
    }
}

/// Runs a store command, failing with [`StoreError::Timeout`] if it does
/// not settle within `timeout`.
async fn bounded<T>(
    timeout: Duration,
    operation: &'static str,
    command: impl Future<Output = RedisResult<T>>,
) -> Result<T> {
    match tokio::time::timeout(timeout, command).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(StoreError::Timeout { operation, timeout }),
    }
}

/// Strips credentials from a Redis URI for logging.
fn redacted(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme), Some(at)) if at > scheme => {
            format!("{}***{}", &url[..scheme + 3], &url[at..])
        }
        _ => url.to_string(),
    }
}
