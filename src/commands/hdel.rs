use tokio::sync::Mutex;

use crate::key_value_store::KeyValueStore;

/// Removes `field` from the hash at `key` and reports whether it was present.
/// A hash emptied this way stays in the store, like one created by `hgetall`.
pub async fn hdel(store: &Mutex<KeyValueStore>, key: &str, field: &str) -> bool {
    let mut store_guard = store.lock().await;

    store_guard
        .hashes
        .get_mut(key)
        .is_some_and(|hash| hash.remove(field).is_some())
}
