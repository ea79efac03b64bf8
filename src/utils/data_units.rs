//! Unit conversion and human-readable formatting for byte counts.

pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const GIBI_LIMIT: u64 = 1024 * 1024 * 1024;

pub const KIBI_LIMIT_F64: f64 = 1024.0;
pub const MEBI_LIMIT_F64: f64 = 1024.0 * 1024.0;
pub const GIBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0;

/// Suffixes used by [`humanize`], indexed by how many times the value was
/// divided by 1024.
const HUMAN_SUFFIXES: [&str; 5] = ["B", "K", "M", "G", "T"];

/// The unit that numeric (non-human) output is displayed in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DataUnit {
    /// Raw bytes with no unit label.
    Auto,
    Byte,
    Kibi,
    #[default]
    Mebi,
    Gibi,
}

impl DataUnit {
    /// The label printed after a row of numeric values.
    pub fn label(&self) -> &'static str {
        match self {
            DataUnit::Auto => "",
            DataUnit::Byte => "B",
            DataUnit::Kibi => "KiB",
            DataUnit::Mebi => "MiB",
            DataUnit::Gibi => "GiB",
        }
    }

    #[inline]
    fn denominator(&self) -> f64 {
        match self {
            DataUnit::Auto | DataUnit::Byte => 1.0,
            DataUnit::Kibi => KIBI_LIMIT_F64,
            DataUnit::Mebi => MEBI_LIMIT_F64,
            DataUnit::Gibi => GIBI_LIMIT_F64,
        }
    }
}

/// Converts a byte count into the given unit. No rounding happens here.
#[inline]
pub fn convert(bytes: u64, unit: DataUnit) -> f64 {
    bytes as f64 / unit.denominator()
}

/// Auto-scales a byte count into a short string with one decimal digit and a
/// single-letter suffix, e.g. `1536` becomes `1.5K`.
///
/// Scaling stops at tebibytes, so anything larger is still shown with a `T`.
pub fn humanize(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut index = 0;

    while value >= KIBI_LIMIT_F64 && index < HUMAN_SUFFIXES.len() - 1 {
        value /= KIBI_LIMIT_F64;
        index += 1;
    }

    format!("{value:.1}{}", HUMAN_SUFFIXES[index])
}
