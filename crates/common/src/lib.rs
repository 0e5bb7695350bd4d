#![forbid(unsafe_code)]

mod config;
mod error;

pub use config::{PoolConfig, parse_interval};
pub use error::*;

pub const DEFAULT_EXPIRATION_SECS: u64 = 10;
pub const DEFAULT_EXPIRATION: &str = "10s";
