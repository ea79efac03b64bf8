// Argument parsing via clap.
//
// Keep this as a single file with plain comments at the top, since the build
// script includes it directly.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "winfree [OPTIONS]";

/// The arguments for winfree.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    color = ColorChoice::Never,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub(crate) struct Args {
    #[command(flatten)]
    pub(crate) unit_args: UnitArgs,

    #[command(flatten)]
    pub(crate) display_args: DisplayArgs,

    #[command(flatten)]
    pub(crate) repeat_args: RepeatArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

/// Unit flags override each other, so the last one given wins.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Unit Options")]
pub(crate) struct UnitArgs {
    #[arg(
        short = 'b',
        long,
        overrides_with_all = ["kibi", "mebi", "gibi"],
        help = "Shows output in bytes."
    )]
    pub(crate) bytes: bool,

    #[arg(
        short = 'k',
        long,
        overrides_with_all = ["bytes", "mebi", "gibi"],
        help = "Shows output in kibibytes (KiB)."
    )]
    pub(crate) kibi: bool,

    #[arg(
        short = 'm',
        long,
        overrides_with_all = ["bytes", "kibi", "gibi"],
        help = "Shows output in mebibytes (MiB). This is the default."
    )]
    pub(crate) mebi: bool,

    #[arg(
        short = 'g',
        long,
        overrides_with_all = ["bytes", "kibi", "mebi"],
        help = "Shows output in gibibytes (GiB)."
    )]
    pub(crate) gibi: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Display Options")]
pub(crate) struct DisplayArgs {
    #[arg(
        short = 'h',
        long,
        help = "Shows human-readable output.",
        long_help = "Shows all values auto-scaled to the largest fitting unit, with one decimal \
                    digit and a single-letter suffix (e.g. 1.5G). Overrides the unit options."
    )]
    pub(crate) human: bool,

    #[arg(
        short = 't',
        long,
        help = "Shows a line with the sum of memory and swap."
    )]
    pub(crate) total: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Repeat Options")]
pub(crate) struct RepeatArgs {
    #[arg(
        short = 's',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Repeats the display every N seconds.",
        long_help = "Repeats the display every N seconds until interrupted, or until --count \
                    displays have been shown. A value of zero or less displays once."
    )]
    pub(crate) seconds: Option<i64>,

    #[arg(
        short = 'c',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Repeats the display N times.",
        long_help = "Stops after N displays. Only has an effect alongside --seconds. A value of \
                    zero or less repeats forever."
    )]
    pub(crate) count: Option<i64>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(long, action = ArgAction::Help, help = "Prints help information.")]
    help: (),

    #[arg(short = 'V', long, help = "Prints version information.")]
    pub(crate) version: bool,
}
