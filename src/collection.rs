//! Memory data collection.

pub mod error;
pub mod memory;

pub use self::{
    error::{CollectionError, CollectionResult},
    memory::{default_provider, MemoryProvider, MemorySample, MemoryStatus, STANDBY_CAPABLE},
};
