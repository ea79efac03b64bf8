//! Writing memory samples out as a fixed-width table.

use std::io::{self, Write};

use crate::{
    collection::MemorySample,
    options::Options,
    utils::data_units::{convert, humanize},
};

const HEADER: &str = "                 total        used        free";
const STANDBY_HEADER: &str = "     standby";

const LABEL_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 12;
const STANDBY_WIDTH: usize = 10;

/// The total, used and free figures making up one row, in bytes.
#[derive(Debug, Clone, Copy)]
struct RowBytes {
    total: u64,
    used: u64,
    free: u64,
}

impl RowBytes {
    fn sum(self, other: RowBytes) -> RowBytes {
        RowBytes {
            total: self.total.saturating_add(other.total),
            used: self.used.saturating_add(other.used),
            free: self.free.saturating_add(other.free),
        }
    }
}

/// Formats [`MemorySample`]s according to the [`Options`] of this run.
pub struct Reporter<'a> {
    options: &'a Options,
    standby_capable: bool,
}

impl<'a> Reporter<'a> {
    /// Creates a new [`Reporter`]. If `standby_capable` is set, a standby
    /// column is added to the header and memory row.
    pub fn new(options: &'a Options, standby_capable: bool) -> Self {
        Self {
            options,
            standby_capable,
        }
    }

    /// Writes the header, memory and swap rows, and the total row if asked for.
    pub fn write_sample<W: Write + ?Sized>(
        &self, out: &mut W, sample: &MemorySample,
    ) -> io::Result<()> {
        let mem = RowBytes {
            total: sample.mem_total,
            used: sample.mem_used,
            free: sample.mem_free,
        };
        let swap = RowBytes {
            total: sample.swap_total,
            used: sample.swap_used,
            free: sample.swap_free,
        };

        if self.standby_capable {
            writeln!(out, "{HEADER}{STANDBY_HEADER}")?;
            // A failed standby read still gets a column, it just shows zero.
            self.write_row(out, "Mem:", mem, Some(sample.standby.unwrap_or(0)))?;
        } else {
            writeln!(out, "{HEADER}")?;
            self.write_row(out, "Mem:", mem, None)?;
        }

        self.write_row(out, "Swap:", swap, None)?;

        if self.options.show_total {
            // Raw bytes are summed first, then formatted like any other row.
            self.write_row(out, "Total:", mem.sum(swap), None)?;
        }

        Ok(())
    }

    fn write_row<W: Write + ?Sized>(
        &self, out: &mut W, label: &str, row: RowBytes, standby: Option<u64>,
    ) -> io::Result<()> {
        write!(
            out,
            "{label:<LABEL_WIDTH$}{} {} {}",
            self.cell(row.total, VALUE_WIDTH),
            self.cell(row.used, VALUE_WIDTH),
            self.cell(row.free, VALUE_WIDTH),
        )?;

        if let Some(standby) = standby {
            write!(out, " {}", self.cell(standby, STANDBY_WIDTH))?;
        }

        let unit_label = self.options.unit.label();
        if self.options.human || unit_label.is_empty() {
            writeln!(out)
        } else {
            writeln!(out, " {unit_label}")
        }
    }

    fn cell(&self, bytes: u64, width: usize) -> String {
        if self.options.human {
            format!("{:>width$}", humanize(bytes))
        } else {
            format!("{:>width$.0}", convert(bytes, self.options.unit))
        }
    }
}
