//! Command runners wiring CLI arguments to the install steps.
use crate::cli::{CompletionArgs, NanoHighlightArgs, RootArgs};
use crate::highlight::install_highlighting;
use crate::nanorc::link_nanorc;
use crate::paths::NanoPaths;
use crate::progress::Spinner;
use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io;

/// Install the highlighting file, then register it in `~/.nanorc`.
///
/// Both steps are fatal: a failed link aborts with an error even though the
/// highlighting file is already in place.
pub fn run_nano_highlight(args: &NanoHighlightArgs) -> Result<()> {
    let paths = NanoPaths::from_home()?;
    run_nano_highlight_in(&paths, args)
}

pub(crate) fn run_nano_highlight_in(paths: &NanoPaths, args: &NanoHighlightArgs) -> Result<()> {
    let spinner = Spinner::start("Installing highlighting file");
    let highlighting =
        install_highlighting(paths, args.force).context("install highlighting file")?;

    spinner.set_step("Updating .nanorc file");
    link_nanorc(paths, &highlighting).context("update .nanorc")?;
    spinner.finish();

    println!("Successfully installed git highlighting for nano");
    Ok(())
}

/// Write a completion script for `args.shell` to stdout.
pub fn run_completion(args: &CompletionArgs) -> Result<()> {
    let mut cmd = RootArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
