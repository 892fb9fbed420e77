use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::*;
use std::path::PathBuf;

use mdextract_lib::exit_codes::exit;

mod cli_types;
mod commands;

use cli_types::{MultiArgs, SingleArgs};

#[derive(Parser)]
#[command(name = "mdextract", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ignore any configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate matching code blocks into one output
    Single(SingleArgs),

    /// Write matching code blocks to the files named by their `file=` tag
    Multi(MultiArgs),

    /// Create a default .mdextract.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let global = commands::GlobalOptions {
        config: cli.config.clone(),
        no_config: cli.no_config,
    };

    let result = match cli.command {
        Commands::Single(args) => commands::single::handle_single(&args, &global),
        Commands::Multi(args) => commands::multi::handle_multi(&args, &global),
        Commands::Init { force } => commands::init::handle_init(force).map(|_| commands::Outcome::Done),
        Commands::Completions { shell, list } => {
            commands::completions::handle_completions(shell, list).map(|_| commands::Outcome::Done)
        }
    };

    match result {
        Ok(commands::Outcome::NothingExtracted) => exit::nothing_extracted(),
        Ok(commands::Outcome::Done) => exit::success(),
        Err(e) => {
            eprintln!("{}: {e:#}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
