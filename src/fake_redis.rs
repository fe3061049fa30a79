use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    commands::{self, CommandError},
    key_value_store::{Hash, KeyValueStore},
};

/// Handle to one in-memory store instance.
///
/// Cloning the handle shares the instance; [`FakeRedis::new`] always creates
/// an empty, independent one. Every operation runs under a single lock held
/// by the instance, so all operations across strings, hashes and lists are
/// totally ordered.
#[derive(Debug, Clone, Default)]
pub struct FakeRedis {
    store: Arc<Mutex<KeyValueStore>>,
}

impl FakeRedis {
    pub fn new() -> Self {
        FakeRedis::default()
    }

    pub async fn set(&self, key: &str, value: &str) {
        commands::set(&self.store, key, value).await
    }

    pub async fn get(&self, key: &str) -> Result<String, CommandError> {
        commands::get(&self.store, key).await
    }

    pub async fn hset(&self, key: &str, field: &str, value: &str) {
        commands::hset(&self.store, key, field, value).await
    }

    pub async fn hget(&self, key: &str, field: &str) -> Result<String, CommandError> {
        commands::hget(&self.store, key, field).await
    }

    pub async fn hgetall(&self, key: &str) -> Hash {
        commands::hgetall(&self.store, key).await
    }

    pub async fn hexists(&self, key: &str, field: &str) -> bool {
        commands::hexists(&self.store, key, field).await
    }

    pub async fn hincrby(
        &self,
        key: &str,
        field: &str,
        amount: i64,
    ) -> Result<String, CommandError> {
        commands::hincrby(&self.store, key, field, amount).await
    }

    pub async fn hdel(&self, key: &str, field: &str) -> bool {
        commands::hdel(&self.store, key, field).await
    }

    pub async fn hlen(&self, key: &str) -> usize {
        commands::hlen(&self.store, key).await
    }

    pub async fn lpush(&self, key: &str, value: &str) -> usize {
        commands::lpush(&self.store, key, value).await
    }

    pub async fn rpush(&self, key: &str, value: &str) -> usize {
        commands::rpush(&self.store, key, value).await
    }

    pub async fn lpop(&self, key: &str) -> Result<String, CommandError> {
        commands::lpop(&self.store, key).await
    }

    pub async fn rpop(&self, key: &str) -> Result<String, CommandError> {
        commands::rpop(&self.store, key).await
    }

    /// Pops the first element of the list at `key`, waiting up to `timeout`
    /// for one to be pushed. Fails with [`CommandError::Timeout`] otherwise.
    pub async fn blpop(&self, key: &str, timeout: Duration) -> Result<String, CommandError> {
        commands::blpop(&self.store, key, timeout).await
    }

    /// Like [`FakeRedis::blpop`], popping from the end of the list.
    pub async fn brpop(&self, key: &str, timeout: Duration) -> Result<String, CommandError> {
        commands::brpop(&self.store, key, timeout).await
    }

    pub async fn llen(&self, key: &str) -> usize {
        commands::llen(&self.store, key).await
    }

    pub async fn lrange(&self, key: &str, start_index: isize, end_index: isize) -> Vec<String> {
        commands::lrange(&self.store, key, start_index, end_index).await
    }

    /// Number of callers currently blocked in [`FakeRedis::blpop`] or
    /// [`FakeRedis::brpop`] on `key`.
    pub async fn waiter_count(&self, key: &str) -> usize {
        let store_guard = self.store.lock().await;
        store_guard.state.waiter_count(key)
    }
}
