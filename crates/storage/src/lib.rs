#![forbid(unsafe_code)]

mod clock;
mod entry;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::ExpiringRotationStore;

pub use rotapool_common::{ConfigError, PoolConfig, parse_interval};
