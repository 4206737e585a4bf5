//! Tasklist CLI entry point

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use tasklist::{Shell, ShellConfig, TerminalInput};

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "Interactive in-memory task list manager")]
#[command(version)]
struct Cli {
    /// Read shell settings from this YAML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Don't wait for Enter after each menu interaction
    #[arg(long)]
    no_pause: bool,

    /// Refuse task descriptions longer than N characters
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

    /// Refuse tasks that repeat an existing one (ignoring case)
    #[arg(long)]
    unique: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags given on the command line win over the config file
    fn apply(&self, config: &mut ShellConfig) {
        if self.no_banner {
            config.banner = false;
        }
        if self.no_pause {
            config.pause = false;
        }
        if self.max_length.is_some() {
            config.max_length = self.max_length;
        }
        if self.unique {
            config.reject_duplicates = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; stderr only, quiet by default so it stays out of the menu
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("tasklist v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            ShellConfig::from_file(path)?
        }
        None => ShellConfig::auto_load()?,
    };
    cli.apply(&mut config);
    config.validate()?;
    log::debug!("Config: {:?}", config);

    let input = TerminalInput::spawn()?;
    let mut shell = Shell::new(input, io::stdout().lock(), config);
    shell.run()
}
