//! An in-process, in-memory stand-in for a Redis server.
//!
//! Tests and development setups can use [`FakeRedis`] wherever they would
//! otherwise talk to a real server. It supports:
//!
//! - Plain string keys (SET, GET)
//! - Hashes (HSET, HGET, HGETALL, HEXISTS, HINCRBY, HDEL, HLEN)
//! - Lists used as queues (LPUSH, RPUSH, LPOP, RPOP, LLEN, LRANGE)
//! - Blocking pops with a timeout (BLPOP, BRPOP)
//!
//! There is no wire protocol: callers hold a [`FakeRedis`] handle and call
//! its async methods directly. All data lives in memory for as long as the
//! instance does.

pub mod commands;
pub mod fake_redis;
pub mod key_value_store;
pub mod state;

pub use commands::CommandError;
pub use fake_redis::FakeRedis;
