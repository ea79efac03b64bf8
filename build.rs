use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...");
    }

    res
}

fn generate_completions_and_manpage() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/winfree/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/winfree/manpage/";

    let completion_out_dir = PathBuf::from(COMPLETION_DIR);
    let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

    create_dir(&completion_out_dir)?;
    create_dir(&manpage_out_dir)?;

    let mut cmd = Args::command();
    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, &mut cmd, "winfree", &completion_out_dir)?;
    }

    let mut buffer: Vec<u8> = Default::default();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(manpage_out_dir.join("winfree.1"), buffer)?;

    Ok(())
}

fn main() -> Result<()> {
    const ENV_KEY: &str = "WINFREE_GENERATE";

    println!("cargo:rerun-if-env-changed={ENV_KEY}");

    match env::var_os(ENV_KEY) {
        Some(var) if !var.is_empty() => generate_completions_and_manpage(),
        _ => Ok(()),
    }
}
