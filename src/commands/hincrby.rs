use tokio::sync::Mutex;

use crate::{commands::command_error::CommandError, key_value_store::KeyValueStore};

/// Handles the HINCRBY command.
///
/// Adds `amount` to the integer stored in `field` of the hash at `key`. A
/// missing hash or field starts out as `"0"`. The read, the addition and the
/// write all happen while the store lock is held, so concurrent increments
/// never lose updates.
///
/// # Returns
///
/// * `Ok(String)` - The new value, in the same string form it is stored in
/// * `Err(CommandError::NotNumeric)` - If the stored value is not a base-10 `i64`
///   or the sum overflows. The stored value is left untouched.
pub async fn hincrby(
    store: &Mutex<KeyValueStore>,
    key: &str,
    field: &str,
    amount: i64,
) -> Result<String, CommandError> {
    let mut store_guard = store.lock().await;

    let stored_data = store_guard
        .hashes
        .entry(key.to_string())
        .or_default()
        .entry(field.to_string())
        .or_insert_with(|| "0".to_string());

    let int = stored_data
        .parse::<i64>()
        .map_err(|_| CommandError::NotNumeric)?;
    let incremented_int = int.checked_add(amount).ok_or(CommandError::NotNumeric)?;
    *stored_data = incremented_int.to_string();

    tracing::trace!(key, field, value = incremented_int, "hash field incremented");

    Ok(stored_data.clone())
}
