use tokio::sync::Mutex;

use crate::key_value_store::KeyValueStore;

pub async fn llen(store: &Mutex<KeyValueStore>, key: &str) -> usize {
    let store_guard = store.lock().await;

    store_guard.lists.get(key).map_or(0, |list| list.len())
}
