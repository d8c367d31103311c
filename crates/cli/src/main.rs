mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "favicon-kit")]
#[command(version, about = "Gradient SVG favicons for numbered static sites", long_about = None)]
struct Cli {
    /// Config file (default: <PATH>/favicon-kit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    // None runs `generate` in the current directory
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Write favicons and link them from each site's entry points
    Generate {
        /// Root directory holding the NN-* site folders
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show what generate would write and patch, without touching files
    Check {
        /// Root directory holding the NN-* site folders
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            path: PathBuf::from("."),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command.unwrap_or_default() {
        Command::Generate { path } => commands::generate::run(path, cli.config),
        Command::Check { path } => commands::check::run(path, cli.config),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "favicon-kit", &mut io::stdout());
            Ok(())
        }
    }
}
