use tokio::sync::Mutex;

use crate::key_value_store::KeyValueStore;

/// Stores `value` under the plain string `key`, replacing any previous value.
///
/// Strings have their own map, so a string key never shares storage with a
/// hash key of the same name.
pub async fn set(store: &Mutex<KeyValueStore>, key: &str, value: &str) {
    let mut store_guard = store.lock().await;
    store_guard
        .strings
        .insert(key.to_string(), value.to_string());
}
