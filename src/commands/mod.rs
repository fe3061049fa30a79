mod blpop;
mod command_error;
mod get;
mod hdel;
mod hget;
mod hgetall;
mod hincrby;
mod hset;
mod llen;
mod lpop;
mod lrange;
mod rpush_and_lpush;
mod set;

pub use blpop::{blpop, brpop};
pub use command_error::CommandError;
pub use get::get;
pub use hdel::hdel;
pub use hget::{hexists, hget};
pub use hgetall::{hgetall, hlen};
pub use hincrby::hincrby;
pub use hset::hset;
pub use llen::llen;
pub use lpop::{lpop, rpop};
pub use lrange::lrange;
pub use rpush_and_lpush::{lpush, rpush};
pub use set::set;
