use tokio::sync::Mutex;

use crate::{commands::command_error::CommandError, key_value_store::KeyValueStore};

/// Removes and returns the first element of the list at `key`.
///
/// # Returns
///
/// * `Ok(String)` - The removed element
/// * `Err(CommandError::EmptyQueue)` - If the key was never pushed to or the list is drained
pub async fn lpop(store: &Mutex<KeyValueStore>, key: &str) -> Result<String, CommandError> {
    let mut store_guard = store.lock().await;
    pop_from_list(&mut store_guard, key, true).ok_or(CommandError::EmptyQueue)
}

/// Removes and returns the last element of the list at `key`.
///
/// Fails with `CommandError::EmptyQueue` under the same conditions as [`lpop`].
pub async fn rpop(store: &Mutex<KeyValueStore>, key: &str) -> Result<String, CommandError> {
    let mut store_guard = store.lock().await;
    pop_from_list(&mut store_guard, key, false).ok_or(CommandError::EmptyQueue)
}

/// Pops one element from the front or back of a list. A drained list keeps
/// its map entry; it behaves exactly like an unseen key.
pub(crate) fn pop_from_list(
    store: &mut KeyValueStore,
    key: &str,
    from_front: bool,
) -> Option<String> {
    let list = store.lists.get_mut(key)?;

    if from_front {
        list.pop_front()
    } else {
        list.pop_back()
    }
}
