//! Collecting memory data using the Win32 API.

use std::mem::size_of;

use windows::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};

use crate::collection::{
    error::{CollectionError, CollectionResult},
    memory::{MemoryProvider, MemoryStatus},
};

const MEMORYSTATUSEX_SIZE: u32 = size_of::<MEMORYSTATUSEX>() as _;

/// A [`MemoryProvider`] using `GlobalMemoryStatusEx`, and the PDH standby
/// cache counter if the `standby` feature is enabled.
#[derive(Debug, Default)]
pub struct WindowsProvider;

impl MemoryProvider for WindowsProvider {
    fn memory_status(&mut self) -> CollectionResult<MemoryStatus> {
        let mut status = MEMORYSTATUSEX {
            dwLength: MEMORYSTATUSEX_SIZE,
            ..Default::default()
        };

        // SAFETY: `status` is a properly sized and initialized MEMORYSTATUSEX, and we only
        // read from it if the call succeeds.
        unsafe { GlobalMemoryStatusEx(&mut status) }.map_err(|err| {
            CollectionError::general(anyhow::Error::from(err).context("GlobalMemoryStatusEx failed"))
        })?;

        Ok(MemoryStatus {
            mem_total: status.ullTotalPhys,
            mem_free: status.ullAvailPhys,
            swap_total: status.ullTotalPageFile,
            swap_free: status.ullAvailPageFile,
        })
    }

    fn try_read_standby(&mut self) -> Option<u64> {
        standby::read_standby_bytes()
    }

    fn supports_standby(&self) -> bool {
        cfg!(feature = "standby")
    }
}

#[cfg(feature = "standby")]
mod standby {
    use windows::{
        core::{w, PCWSTR},
        Win32::{
            Foundation::ERROR_SUCCESS,
            System::Performance::{
                PdhAddEnglishCounterW, PdhCloseQuery, PdhCollectQueryData,
                PdhGetFormattedCounterValue, PdhOpenQueryW, PDH_FMT_COUNTERVALUE, PDH_FMT_LARGE,
                PDH_HCOUNTER, PDH_HQUERY,
            },
        },
    };

    /// Counter paths added with `PdhAddEnglishCounterW` don't depend on the system locale.
    const STANDBY_COUNTER: PCWSTR = w!("\\Memory\\Standby Cache Normal Priority Bytes");

    /// Closes the PDH query on drop.
    struct QueryHandle(PDH_HQUERY);

    impl Drop for QueryHandle {
        fn drop(&mut self) {
            // SAFETY: The handle was opened by a successful PdhOpenQueryW call and is
            // closed exactly once.
            let _ = unsafe { PdhCloseQuery(self.0) };
        }
    }

    #[inline]
    fn check(status: u32, stage: &str) -> Option<()> {
        if status == ERROR_SUCCESS.0 {
            Some(())
        } else {
            crate::debug!("standby counter: {stage} failed with status {status:#x}");
            None
        }
    }

    /// Reads the standby cache size in bytes. Any failure along the way gives `None`.
    pub(super) fn read_standby_bytes() -> Option<u64> {
        // SAFETY: All out-pointers reference live locals, the counter is only used while
        // the query is open, and the union is only read after a successful format call
        // with PDH_FMT_LARGE.
        unsafe {
            let mut query = PDH_HQUERY::default();
            check(PdhOpenQueryW(PCWSTR::null(), 0, &mut query), "opening the query")?;
            let query = QueryHandle(query);

            let mut counter = PDH_HCOUNTER::default();
            check(
                PdhAddEnglishCounterW(query.0, STANDBY_COUNTER, 0, &mut counter),
                "adding the counter",
            )?;
            check(PdhCollectQueryData(query.0), "collecting data")?;

            let mut value = PDH_FMT_COUNTERVALUE::default();
            check(
                PdhGetFormattedCounterValue(counter, PDH_FMT_LARGE, None, &mut value),
                "formatting the value",
            )?;

            u64::try_from(value.Anonymous.largeValue).ok()
        }
    }
}

#[cfg(not(feature = "standby"))]
mod standby {
    pub(super) fn read_standby_bytes() -> Option<u64> {
        None
    }
}
