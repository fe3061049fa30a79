use std::{sync::Arc, time::Duration};

use tokio::{
    runtime::Handle,
    sync::{mpsc, Mutex},
    time::{timeout_at, Instant},
};

use crate::{
    commands::{command_error::CommandError, lpop::pop_from_list},
    key_value_store::KeyValueStore,
};

/// A waiter only ever receives a single wake-up before it leaves the registry.
const NOTIFICATION_CHANNEL_CAPACITY: usize = 1;

/// Stand-in deadline distance for timeouts too large to add to `Instant::now()`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

pub async fn blpop(
    store: &Arc<Mutex<KeyValueStore>>,
    key: &str,
    timeout: Duration,
) -> Result<String, CommandError> {
    blocking_pop(store, key, timeout, true).await
}

pub async fn brpop(
    store: &Arc<Mutex<KeyValueStore>>,
    key: &str,
    timeout: Duration,
) -> Result<String, CommandError> {
    blocking_pop(store, key, timeout, false).await
}

/// A registered waiter, owned by the blocking call that registered it.
///
/// If the blocking call is dropped while the waiter is armed, the waiter is
/// taken out of the registry and a wake-up it received but never acted on is
/// handed to the next waiter on the key.
struct WaiterGuard {
    store: Arc<Mutex<KeyValueStore>>,
    key: String,
    waiter_id: u64,
    receiver: mpsc::Receiver<()>,
    notified: bool,
    armed: bool,
}

impl WaiterGuard {
    /// The owning call has the store lock and settles the waiter itself.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for WaiterGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let notified = self.notified || self.receiver.try_recv().is_ok();

        if let Ok(mut store_guard) = self.store.try_lock() {
            release_waiter(&mut store_guard, &self.key, self.waiter_id, notified);
            return;
        }

        // Contended: finish the cleanup on the runtime once the lock is free
        let Ok(handle) = Handle::try_current() else {
            return;
        };
        let store = Arc::clone(&self.store);
        let key = std::mem::take(&mut self.key);
        let waiter_id = self.waiter_id;
        handle.spawn(async move {
            let mut store_guard = store.lock().await;
            release_waiter(&mut store_guard, &key, waiter_id, notified);
        });
    }
}

/// Removes an abandoned waiter. A wake-up it was given goes to the next
/// waiter if the list still holds an element for it.
fn release_waiter(store: &mut KeyValueStore, key: &str, waiter_id: u64, notified: bool) {
    store.state.remove_waiter(key, waiter_id);

    let has_elements = store.lists.get(key).is_some_and(|list| !list.is_empty());
    if notified && has_elements {
        store.state.notify_waiter(key);
    }

    tracing::debug!(key, waiter_id, notified, "blocking pop cancelled");
}

/// Pops from one end of the list at `key`, waiting up to `timeout` for an
/// element to be pushed if the list is empty.
///
/// The failed pop and the waiter registration happen under one lock
/// acquisition, so a push cannot land unnoticed in between. The lock is
/// released while waiting. Pushes wake waiters in registration order; a
/// woken waiter that finds the element already taken by someone else
/// registers again for the time it has left. Dropping the returned future
/// deregisters the waiter.
///
/// A zero `timeout` makes a single attempt.
///
/// # Returns
///
/// * `Ok(String)` - The popped element
/// * `Err(CommandError::Timeout)` - If no element became available in time
async fn blocking_pop(
    store: &Arc<Mutex<KeyValueStore>>,
    key: &str,
    timeout: Duration,
    from_front: bool,
) -> Result<String, CommandError> {
    let now = Instant::now();
    let deadline = now.checked_add(timeout).unwrap_or(now + FAR_FUTURE);
    let mut woken_waiter: Option<WaiterGuard> = None;

    loop {
        let (sender, receiver) = mpsc::channel(NOTIFICATION_CHANNEL_CAPACITY);

        let mut waiter = {
            let mut store_guard = store.lock().await;

            // Under the lock this attempt consumes the previous wake-up
            if let Some(waiter) = woken_waiter.take() {
                waiter.disarm();
            }

            if let Some(value) = pop_from_list(&mut store_guard, key, from_front) {
                return Ok(value);
            }

            if Instant::now() >= deadline {
                return Err(CommandError::Timeout);
            }

            let waiter_id = store_guard.state.add_waiter(key.to_string(), sender);
            WaiterGuard {
                store: Arc::clone(store),
                key: key.to_string(),
                waiter_id,
                receiver,
                notified: false,
                armed: true,
            }
        };

        let waiter_id = waiter.waiter_id;
        tracing::debug!(key, waiter_id, ?timeout, "waiting for list element");

        match timeout_at(deadline, waiter.receiver.recv()).await {
            Ok(_) => {
                tracing::debug!(key, waiter_id, "woken by push");
                waiter.notified = true;
                woken_waiter = Some(waiter);
            }
            Err(_) => {
                let mut store_guard = store.lock().await;
                waiter.disarm();
                store_guard.state.remove_waiter(key, waiter_id);

                // A push may have landed between the deadline and the lock
                if let Some(value) = pop_from_list(&mut store_guard, key, from_front) {
                    return Ok(value);
                }

                tracing::debug!(key, waiter_id, ?timeout, "timed out waiting for list element");
                return Err(CommandError::Timeout);
            }
        }
    }
}
