use tokio::sync::Mutex;

use crate::{commands::command_error::CommandError, key_value_store::KeyValueStore};

/// Retrieves the value stored under the plain string `key`.
///
/// # Returns
///
/// * `Ok(String)` - A copy of the stored value (possibly empty)
/// * `Err(CommandError::NotFound)` - If `key` was never set
pub async fn get(store: &Mutex<KeyValueStore>, key: &str) -> Result<String, CommandError> {
    let store_guard = store.lock().await;

    store_guard
        .strings
        .get(key)
        .cloned()
        .ok_or(CommandError::NotFound)
}
