//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod init;
pub mod inspect;
pub mod inspector;
pub mod status;
pub mod transport;

pub use args::{OutputFormat, SeverityArg};
pub use context::CommandContext;

/// reqinspect - Pre-flight inspections for API request definitions
#[derive(Parser, Debug)]
#[command(name = "reqinspect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "REQINSPECT_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "REQINSPECT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the active transport (browser, proxy, extension, agent, native)
    #[arg(long, global = true, env = "REQINSPECT_TRANSPORT", hide_env = true)]
    pub transport: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "REQINSPECT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a configuration file interactively
    Init,

    /// Show configuration and transport status
    Status,

    /// Display version information
    Version,

    /// Inspect a request file and report findings
    #[command(after_help = "EXAMPLES:\n  \
            reqinspect inspect request.yaml                     # Findings for the saved transport\n  \
            reqinspect inspect request.yaml --transport agent   # As if the agent were active\n  \
            reqinspect inspect request.json --format json       # JSON for scripting\n  \
            reqinspect inspect request.yaml --fail-on warning   # Non-zero exit on warnings")]
    Inspect {
        /// Request document (YAML or JSON)
        file: String,

        /// Exit with status 2 when any finding is at or above this severity
        #[arg(long, value_enum)]
        fail_on: Option<SeverityArg>,
    },

    /// List registered inspectors
    #[command(subcommand)]
    Inspector(InspectorCommands),

    /// Show and select the network transport
    #[command(subcommand)]
    Transport(TransportCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   reqinspect completion bash > /etc/bash_completion.d/reqinspect
  zsh:    reqinspect completion zsh > \"${fpath[1]}/_reqinspect\"
  fish:   reqinspect completion fish > ~/.config/fish/completions/reqinspect.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Inspector subcommands
#[derive(Subcommand, Debug)]
pub enum InspectorCommands {
    /// List inspectors in the order their findings are reported
    #[command(visible_alias = "ls")]
    List,
}

/// Transport subcommands
#[derive(Subcommand, Debug)]
pub enum TransportCommands {
    /// List transports available on the configured platform
    #[command(visible_alias = "ls")]
    List,

    /// Save the active transport to the config file
    Set {
        /// Transport ID
        id: String,
    },
}
