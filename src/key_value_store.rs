use std::collections::{HashMap, VecDeque};

use crate::state::State;

pub type Hash = HashMap<String, String>;

/// Everything a store instance owns. A single lock around this value
/// serializes every operation across all domains.
#[derive(Debug, Default)]
pub struct KeyValueStore {
    pub strings: HashMap<String, String>,
    pub hashes: HashMap<String, Hash>,
    pub lists: HashMap<String, VecDeque<String>>,
    pub state: State,
}

impl KeyValueStore {
    pub fn new() -> Self {
        KeyValueStore::default()
    }
}
