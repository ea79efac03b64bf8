//! Collecting memory data using sysinfo.

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::collection::{
    error::{CollectionError, CollectionResult},
    memory::{MemoryProvider, MemoryStatus},
};

/// A [`MemoryProvider`] backed by [`sysinfo`]. This never reports standby
/// memory.
///
/// "Free" memory here is sysinfo's _available_ memory, which matches what
/// Windows reports as available physical memory: it includes reclaimable
/// cache, unlike sysinfo's own notion of free memory.
pub struct SysinfoProvider {
    sys: System,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());

        Self {
            sys: System::new_with_specifics(refresh_kind),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProvider for SysinfoProvider {
    fn memory_status(&mut self) -> CollectionResult<MemoryStatus> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(CollectionError::Unsupported);
        }

        self.sys.refresh_memory();

        let mem_total = self.sys.total_memory();
        if mem_total == 0 {
            return Err(CollectionError::from_str(
                "the OS reported zero bytes of physical memory",
            ));
        }

        Ok(MemoryStatus {
            mem_total,
            mem_free: self.sys.available_memory(),
            swap_total: self.sys.total_swap(),
            swap_free: self.sys.free_swap(),
        })
    }
}
