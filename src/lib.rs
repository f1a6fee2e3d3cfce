pub mod config;
pub mod error;
pub mod longmap;

pub use crate::config::{LongMapConfig, DEFAULT_TABLE_SIZE};
pub use crate::error::LongMapError;
pub use crate::longmap::LongMap;
