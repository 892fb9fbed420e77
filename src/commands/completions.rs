//! Handler for the `completions` command.

use anyhow::bail;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate};
use std::io::stdout;

/// Print a completion script for `shell`, or for the shell named by `$SHELL`.
pub fn handle_completions(shell: Option<Shell>, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Available shells:");
        for shell in Shell::value_variants() {
            if let Some(value) = shell.to_possible_value() {
                println!("  {}", value.get_name());
            }
        }
        return Ok(());
    }

    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not detect a shell from $SHELL; pass one explicitly, e.g. `mdextract completions bash` (see --list)");
    };

    log::debug!("Generating {shell} completions");
    generate(shell, &mut crate::Cli::command(), "mdextract", &mut stdout());
    Ok(())
}
