//! Handler for the `init` command.

use colored::*;
use mdextract_lib::config::CONFIG_FILES;
use mdextract_lib::init::create_default_config;
use std::path::Path;

/// Write a default configuration file into the current directory.
pub fn handle_init(force: bool) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILES[0]);

    if create_default_config(path, force)? {
        println!("Created default configuration file: {}", path.display());
    } else {
        eprintln!(
            "{}: {} already exists (use --force to overwrite)",
            "Warning".yellow().bold(),
            path.display()
        );
    }

    Ok(())
}
