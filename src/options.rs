//! How to read the command line into [`Options`].

pub(crate) mod args;
pub mod error;

use std::{ffi::OsString, num::NonZeroU64, time::Duration};

use clap::{error::ErrorKind, CommandFactory, Parser};

use self::{
    args::Args,
    error::{OptionError, OptionResult},
};
use crate::utils::data_units::DataUnit;

/// How many times to display memory usage when repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatCount {
    #[default]
    Unlimited,
    Times(NonZeroU64),
}

impl RepeatCount {
    /// Whether another report should follow after `reports` have been written.
    #[inline]
    pub fn allows_more(&self, reports: u64) -> bool {
        match self {
            RepeatCount::Unlimited => true,
            RepeatCount::Times(limit) => reports < limit.get(),
        }
    }
}

/// The configuration for a run of winfree. This is never modified after
/// it is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub unit: DataUnit,
    pub human: bool,
    pub show_total: bool,
    /// How long to wait between reports. `None` means only report once.
    pub interval: Option<Duration>,
    pub repeat: RepeatCount,
    pub show_version: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        let unit_args = args.unit_args;
        let unit = if unit_args.bytes {
            DataUnit::Byte
        } else if unit_args.kibi {
            DataUnit::Kibi
        } else if unit_args.gibi {
            DataUnit::Gibi
        } else {
            DataUnit::Mebi
        };

        let interval = args
            .repeat_args
            .seconds
            .and_then(|secs| u64::try_from(secs).ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let repeat = args
            .repeat_args
            .count
            .and_then(|count| u64::try_from(count).ok())
            .and_then(NonZeroU64::new)
            .map_or(RepeatCount::Unlimited, RepeatCount::Times);

        Options {
            unit,
            human: args.display_args.human,
            show_total: args.display_args.total,
            interval,
            repeat,
            show_version: args.other_args.version,
        }
    }
}

/// The result of reading the command line.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    Run(Options),
    /// Help was requested. Contains the rendered help text.
    Help(String),
}

/// Parses the given arguments. The first item is the binary name.
pub fn parse_args<I, T>(itr: I) -> OptionResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(itr) {
        Ok(args) => Ok(Invocation::Run(args.into())),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(Invocation::Help(help_text())),
        Err(err) => Err(err.into()),
    }
}

/// The full help text, used both for `--help` and after usage errors.
pub fn help_text() -> String {
    Args::command().render_help().to_string()
}
