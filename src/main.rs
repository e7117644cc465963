//! reqinspect - Pre-flight inspections for API request definitions

use clap::Parser;
use log::LevelFilter;

mod cli;
mod config;
mod error;
mod i18n;
mod inspection;
mod models;
mod output;
mod reactive;
mod tabs;
mod transport;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, InspectorCommands, TransportCommands};
use error::{Error, Result};

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        let code = match err {
            Error::FindingsAtOrAbove { .. } => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("reqinspect version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Inspect { file, fail_on } => cli::inspect::run(&opts, &file, fail_on),
        Commands::Inspector(InspectorCommands::List) => cli::inspector::list(&opts),
        Commands::Transport(transport_cmd) => match transport_cmd {
            TransportCommands::List => cli::transport::list(&opts),
            TransportCommands::Set { id } => cli::transport::set(&opts, &id),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
