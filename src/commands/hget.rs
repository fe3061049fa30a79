use tokio::sync::Mutex;

use crate::{commands::command_error::CommandError, key_value_store::KeyValueStore};

/// Returns a copy of the value stored in `field` of the hash at `key`.
///
/// # Returns
///
/// * `Ok(String)` - The stored value
/// * `Err(CommandError::NotFound)` - If the key was never written or the hash has no such field
pub async fn hget(
    store: &Mutex<KeyValueStore>,
    key: &str,
    field: &str,
) -> Result<String, CommandError> {
    let store_guard = store.lock().await;

    let Some(hash) = store_guard.hashes.get(key) else {
        return Err(CommandError::NotFound);
    };

    hash.get(field).cloned().ok_or(CommandError::NotFound)
}

pub async fn hexists(store: &Mutex<KeyValueStore>, key: &str, field: &str) -> bool {
    let store_guard = store.lock().await;

    store_guard
        .hashes
        .get(key)
        .is_some_and(|hash| hash.contains_key(field))
}
