use std::ops::Range;

use tokio::sync::Mutex;

use crate::key_value_store::KeyValueStore;

/// Handles the LRANGE command.
///
/// Returns copies of the elements between `start_index` and `end_index`,
/// both inclusive. Negative indices count from the end of the list, so
/// `(0, -1)` is the whole list. Indices past either end are clamped; a key
/// that was never pushed, or a range that selects nothing, yields an empty
/// vector.
///
/// # Examples
///
/// ```ignore
/// // list at "fruits" is [grape, apple, mango]
/// lrange(&store, "fruits", 0, 1).await;   // [grape, apple]
/// lrange(&store, "fruits", -2, -1).await; // [apple, mango]
/// lrange(&store, "fruits", 5, 9).await;   // []
/// ```
pub async fn lrange(
    store: &Mutex<KeyValueStore>,
    key: &str,
    start_index: isize,
    end_index: isize,
) -> Vec<String> {
    let store_guard = store.lock().await;

    let Some(list) = store_guard.lists.get(key) else {
        return Vec::new();
    };

    let Some(range) = normalize_range(list.len(), start_index, end_index) else {
        return Vec::new();
    };

    list.range(range).cloned().collect()
}

/// Resolves inclusive, possibly negative LRANGE indices against a list of
/// `len` elements into a half-open range of positions. `None` when the range
/// selects nothing.
fn normalize_range(len: usize, start_index: isize, end_index: isize) -> Option<Range<usize>> {
    let len = len as isize;
    let resolve = |index: isize| if index < 0 { len + index } else { index };

    let first = resolve(start_index).max(0);
    let last = resolve(end_index).min(len - 1);

    (first < len && first <= last).then(|| first as usize..last as usize + 1)
}
