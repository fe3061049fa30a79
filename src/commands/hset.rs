use tokio::sync::Mutex;

use crate::key_value_store::KeyValueStore;

/// Sets `field` in the hash stored at `key`, creating the hash if the key is
/// new. Any previous value of the field is overwritten.
pub async fn hset(store: &Mutex<KeyValueStore>, key: &str, field: &str, value: &str) {
    let mut store_guard = store.lock().await;

    store_guard
        .hashes
        .entry(key.to_string())
        .or_default()
        .insert(field.to_string(), value.to_string());
}
