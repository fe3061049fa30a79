use std::collections::{HashMap, VecDeque};

use tokio::sync::mpsc;

/// A caller blocked on a list key, waiting to be told an element was pushed.
#[derive(Debug)]
pub struct Waiter {
    pub id: u64,
    pub sender: mpsc::Sender<()>,
}

/// Registry of blocked poppers, one FIFO queue per list key.
#[derive(Debug, Default)]
pub struct State {
    pub waiters: HashMap<String, VecDeque<Waiter>>,
    next_waiter_id: u64,
}

impl State {
    pub fn new() -> Self {
        State::default()
    }

    /// Registers a waiter at the back of the queue for `key` and returns its id.
    pub fn add_waiter(&mut self, key: String, sender: mpsc::Sender<()>) -> u64 {
        let id = self.next_waiter_id;
        self.next_waiter_id += 1;

        self.waiters
            .entry(key)
            .or_default()
            .push_back(Waiter { id, sender });

        id
    }

    pub fn remove_waiter(&mut self, key: &str, id: u64) {
        if let Some(waiter_queue) = self.waiters.get_mut(key) {
            waiter_queue.retain(|waiter| waiter.id != id);

            if waiter_queue.is_empty() {
                self.waiters.remove(key);
            }
        }
    }

    /// Wakes the oldest waiter on `key`.
    ///
    /// Waiters whose receiving end is gone (the blocking call was dropped) are
    /// discarded until one accepts the notification. Returns whether a waiter
    /// was woken.
    pub fn notify_waiter(&mut self, key: &str) -> bool {
        let Some(waiter_queue) = self.waiters.get_mut(key) else {
            return false;
        };

        let mut notified = false;
        while let Some(waiter) = waiter_queue.pop_front() {
            if waiter.sender.try_send(()).is_ok() {
                notified = true;
                break;
            }
        }

        if waiter_queue.is_empty() {
            self.waiters.remove(key);
        }

        notified
    }

    pub fn waiter_count(&self, key: &str) -> usize {
        self.waiters.get(key).map_or(0, VecDeque::len)
    }
}
