//! Memory data collection.
//!
//! Each supported platform has a [`MemoryProvider`]; the rest of the program
//! only ever sees [`MemorySample`]s.

use crate::collection::error::{CollectionError, CollectionResult};

pub mod sysinfo;

/// Whether the default provider of this build reports standby memory.
pub const STANDBY_CAPABLE: bool = cfg!(all(target_os = "windows", feature = "standby"));

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        pub mod windows;

        /// Returns the memory provider for this platform.
        pub fn default_provider() -> Box<dyn MemoryProvider> {
            Box::new(self::windows::WindowsProvider)
        }
    } else {
        /// Returns the memory provider for this platform.
        pub fn default_provider() -> Box<dyn MemoryProvider> {
            Box::new(self::sysinfo::SysinfoProvider::new())
        }
    }
}

/// Raw physical memory and swap figures as reported by the OS, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStatus {
    pub mem_total: u64,
    pub mem_free: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

/// A single reading of memory and swap usage, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySample {
    pub mem_total: u64,
    pub mem_free: u64,
    pub mem_used: u64,
    /// Only present if the provider could read it.
    pub standby: Option<u64>,
    pub swap_total: u64,
    pub swap_free: u64,
    pub swap_used: u64,
}

impl MemorySample {
    /// Builds a sample, deriving `used = total - free` for memory and swap.
    ///
    /// Free space exceeding the total is returned as an error rather than
    /// clamped.
    pub fn new(status: MemoryStatus, standby: Option<u64>) -> CollectionResult<Self> {
        let mem_used = used_bytes("memory", status.mem_total, status.mem_free)?;
        let swap_used = used_bytes("swap", status.swap_total, status.swap_free)?;

        Ok(MemorySample {
            mem_total: status.mem_total,
            mem_free: status.mem_free,
            mem_used,
            standby,
            swap_total: status.swap_total,
            swap_free: status.swap_free,
            swap_used,
        })
    }
}

#[inline]
fn used_bytes(what: &'static str, total: u64, free: u64) -> CollectionResult<u64> {
    total
        .checked_sub(free)
        .ok_or(CollectionError::Inconsistent { what, total, free })
}

/// Something that can report the host's memory usage.
pub trait MemoryProvider {
    /// Queries physical memory and swap totals. Failure here is fatal.
    fn memory_status(&mut self) -> CollectionResult<MemoryStatus>;

    /// Best-effort read of the standby cache size. `None` if the provider
    /// can't read it, for whatever reason.
    fn try_read_standby(&mut self) -> Option<u64> {
        None
    }

    /// Whether this provider reports standby memory at all.
    fn supports_standby(&self) -> bool {
        false
    }

    /// Takes a full sample.
    fn sample(&mut self) -> CollectionResult<MemorySample> {
        let status = self.memory_status()?;
        let standby = if self.supports_standby() {
            self.try_read_standby()
        } else {
            None
        };

        MemorySample::new(status, standby)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct FixedProvider {
        status: MemoryStatus,
        standby: Option<u64>,
        standby_capable: bool,
        standby_reads: usize,
    }

    impl MemoryProvider for FixedProvider {
        fn memory_status(&mut self) -> CollectionResult<MemoryStatus> {
            Ok(self.status)
        }

        fn try_read_standby(&mut self) -> Option<u64> {
            self.standby_reads += 1;
            self.standby
        }

        fn supports_standby(&self) -> bool {
            self.standby_capable
        }
    }

    const STATUS: MemoryStatus = MemoryStatus {
        mem_total: 16_000,
        mem_free: 6_000,
        swap_total: 4_000,
        swap_free: 4_000,
    };

    #[test]
    fn test_used_is_total_minus_free() {
        let sample = MemorySample::new(STATUS, None).unwrap();

        assert_eq!(sample.mem_used, 10_000);
        assert_eq!(sample.mem_used, sample.mem_total - sample.mem_free);
        assert_eq!(sample.swap_used, 0);
        assert_eq!(sample.swap_used, sample.swap_total - sample.swap_free);
    }

    #[test]
    fn test_free_above_total_is_an_error() {
        let status = MemoryStatus {
            swap_free: 5_000,
            ..STATUS
        };

        match MemorySample::new(status, None) {
            Err(CollectionError::Inconsistent { what, total, free }) => {
                assert_eq!(what, "swap");
                assert_eq!(total, 4_000);
                assert_eq!(free, 5_000);
            }
            other => panic!("expected an inconsistency error, got {other:?}"),
        }
    }

    #[test]
    fn test_standby_only_read_when_supported() {
        let mut provider = FixedProvider {
            status: STATUS,
            standby: Some(1_234),
            standby_capable: false,
            standby_reads: 0,
        };

        assert_eq!(provider.sample().unwrap().standby, None);
        assert_eq!(provider.standby_reads, 0);

        provider.standby_capable = true;
        assert_eq!(provider.sample().unwrap().standby, Some(1_234));
        assert_eq!(provider.standby_reads, 1);
    }

    #[test]
    fn test_failed_standby_read_still_samples() {
        let mut provider: Box<dyn MemoryProvider> = Box::new(FixedProvider {
            status: STATUS,
            standby: None,
            standby_capable: true,
            standby_reads: 0,
        });

        let sample = provider.sample().unwrap();
        assert_eq!(sample.standby, None);
        assert_eq!(sample.mem_total, STATUS.mem_total);
    }

    #[test]
    fn test_default_provider_matches_build() {
        assert_eq!(default_provider().supports_standby(), STANDBY_CAPABLE);
    }
}
