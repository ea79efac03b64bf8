//! The sampling loop: take a sample, report it, wait, repeat.

use std::{io::Write, time::Duration};

use anyhow::Context;

use crate::{collection::MemoryProvider, options::Options, report::Reporter};

/// Decides how the loop waits between reports.
pub trait Pacer {
    /// Waits for `duration`. Returns `true` if the loop should stop instead of
    /// taking another sample.
    fn pause(&self, duration: Duration) -> bool;
}

/// Runs the sample-and-report loop until the repeat settings in `options`
/// are exhausted or `pacer` asks to stop. Returns how many reports were written.
///
/// The first report is written immediately. Without an interval, exactly one
/// report is written regardless of the repeat count.
pub fn run_loop<W, P>(
    options: &Options, provider: &mut dyn MemoryProvider, out: &mut W, pacer: &P,
) -> anyhow::Result<u64>
where
    W: Write + ?Sized,
    P: Pacer + ?Sized,
{
    let reporter = Reporter::new(options, provider.supports_standby());
    let mut reports: u64 = 0;

    loop {
        let sample = provider
            .sample()
            .context("Unable to read the memory status from the OS.")?;

        reporter
            .write_sample(out, &sample)
            .context("Unable to write the memory report.")?;
        out.flush().context("Unable to flush the memory report.")?;

        reports += 1;
        crate::debug!("Wrote report {reports}: {sample:?}");

        let Some(interval) = options.interval else {
            break;
        };

        if !options.repeat.allows_more(reports) {
            break;
        }

        if pacer.pause(interval) {
            crate::info!("Stopping after {reports} reports, cancelled while waiting.");
            break;
        }
    }

    crate::debug!("Finished after {reports} reports.");
    Ok(reports)
}
