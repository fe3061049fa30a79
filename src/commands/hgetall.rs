use tokio::sync::Mutex;

use crate::key_value_store::{Hash, KeyValueStore};

/// Returns a copy of every field and value of the hash stored at `key`.
///
/// An unseen key is created as an empty hash, the same way the emulated
/// server treats keys lazily. The returned map is detached from the store:
/// changing it has no effect on stored data.
pub async fn hgetall(store: &Mutex<KeyValueStore>, key: &str) -> Hash {
    let mut store_guard = store.lock().await;

    store_guard
        .hashes
        .entry(key.to_string())
        .or_default()
        .clone()
}

pub async fn hlen(store: &Mutex<KeyValueStore>, key: &str) -> usize {
    let store_guard = store.lock().await;

    store_guard.hashes.get(key).map_or(0, |hash| hash.len())
}
