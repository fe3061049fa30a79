use tokio::sync::Mutex;

use crate::key_value_store::KeyValueStore;

pub async fn rpush(store: &Mutex<KeyValueStore>, key: &str, value: &str) -> usize {
    push_array_operations(store, key, value, false).await
}

pub async fn lpush(store: &Mutex<KeyValueStore>, key: &str, value: &str) -> usize {
    push_array_operations(store, key, value, true).await
}

/// Adds `value` to one end of the list at `key`, creating the list if the key
/// is new, and wakes the oldest caller blocked on that key.
///
/// Returns the length of the list after the push.
async fn push_array_operations(
    store: &Mutex<KeyValueStore>,
    key: &str,
    value: &str,
    should_prepend: bool,
) -> usize {
    let mut store_guard = store.lock().await;

    let list = store_guard.lists.entry(key.to_string()).or_default();
    if should_prepend {
        list.push_front(value.to_string());
    } else {
        list.push_back(value.to_string());
    }
    let list_length = list.len();

    // One new element, one waiter to wake
    let notified = store_guard.state.notify_waiter(key);

    tracing::trace!(key, list_length, notified, prepend = should_prepend, "pushed list element");

    list_length
}
