use std::{env, process::Command};

/// Returns a QEMU runner target given an architecture.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc" => "ppc",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// Running binary tests via cross needs the right runner in some cases, which
/// shows up in env variables that are only set while using cross.
fn cross_runner() -> Option<String> {
    const CROSS_RUNNER: &str = "CROSS_RUNNER";

    let target_runner = env::vars().find_map(|(k, v)| {
        (k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty()).then_some(v)
    });

    match env::var(CROSS_RUNNER) {
        Ok(cross_runner) if cross_runner == "qemu-user" => target_runner.and_then(|runner| {
            runner
                .split_ascii_whitespace()
                .last()
                .map(|arch| format!("qemu-{}", get_qemu_target(arch)))
        }),
        Ok(cross_runner) if !cross_runner.is_empty() => None,
        _ => target_runner,
    }
}

const WINFREE_EXE_PATH: &str = env!("CARGO_BIN_EXE_winfree");

/// Returns the [`Command`] of a binary invocation of winfree with the given arguments.
pub fn winfree_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(WINFREE_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.arg(WINFREE_EXE_PATH);
            cmd
        }
    };

    cmd.args(args);
    cmd
}
