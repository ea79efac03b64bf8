//! winfree reports physical memory and swap usage in a small table, in the
//! style of `free`. On Windows it can also show the standby cache.
//!
//! The binary entry point is [`start_winfree`].

pub mod app;
pub mod collection;
pub mod options;
pub mod report;

pub mod utils {
    pub mod cancellation_token;
    pub mod data_units;
    pub mod logging;
}

use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::{Context, Result};

use crate::{
    options::{error::OptionError, Invocation},
    utils::cancellation_token::CancellationToken,
};

/// The line printed for `--version`.
pub fn version_string(standby_capable: bool) -> String {
    let description = if standby_capable {
        "free for Windows (with Standby)"
    } else {
        "free"
    };

    format!(
        "{} {} - {description}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Writes a usage error followed by the full help text.
fn write_usage_error<W: Write + ?Sized>(out: &mut W, err: &OptionError) -> io::Result<()> {
    writeln!(out, "{err}\n")?;
    write!(out, "{}", options::help_text())?;
    out.flush()
}

fn write_version<W: Write + ?Sized>(out: &mut W, standby_capable: bool) -> io::Result<()> {
    writeln!(out, "{}", version_string(standby_capable))?;
    out.flush()
}

/// Runs winfree with the process' arguments.
///
/// Everything, usage errors included, is written to stdout. Argument errors
/// print the reason and the help text, then exit the process with status 1.
pub fn start_winfree() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let options = match options::parse_args(std::env::args_os()) {
        Ok(Invocation::Run(options)) => options,
        Ok(Invocation::Help(help)) => {
            write!(out, "{help}")?;
            out.flush()?;
            return Ok(());
        }
        Err(err) => {
            write_usage_error(&mut out, &err)?;
            std::process::exit(1);
        }
    };

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new("debug.log"))?;
    }
    crate::info!("Starting winfree with {options:?}");

    if options.show_version {
        write_version(&mut out, collection::STANDBY_CAPABLE)?;
        return Ok(());
    }

    let mut provider = collection::default_provider();

    let token = Arc::new(CancellationToken::default());
    if options.interval.is_some() {
        let token = token.clone();
        ctrlc::set_handler(move || token.cancel())
            .context("Unable to set the termination handler.")?;
    }

    app::run_loop(&options, &mut *provider, &mut out, &*token)?;
    out.flush()?;

    if token.is_cancelled() {
        crate::info!("Run was cancelled by the termination handler.");
    }

    Ok(())
}
