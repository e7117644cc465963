//! Global CLI options shared across all commands

use clap::ValueEnum;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format override (pretty, table, json)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.reqinspect/config.yaml)
    pub config: Option<String>,

    /// Transport override (bypasses the transport saved in config)
    pub transport: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            transport: cli.transport.clone(),
        }
    }

    /// Resolve the output format: flag/env, then the config preference, then pretty.
    pub fn resolve_format(&self, preferred: Option<&str>) -> OutputFormat {
        self.format
            .or_else(|| preferred.and_then(|p| OutputFormat::from_str(p, true).ok()))
            .unwrap_or_default()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get transport override as `Option<&str>`.
    pub fn transport_ref(&self) -> Option<&str> {
        self.transport.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_captures_globals() {
        let cli = Cli::parse_from([
            "reqinspect",
            "--format",
            "json",
            "--config",
            "/custom/path",
            "--transport",
            "agent",
            "inspector",
            "list",
        ]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, Some(OutputFormat::Json));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.transport_ref(), Some("agent"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: None,
            config: None,
            transport: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.transport_ref(), None);
    }

    #[test]
    fn test_resolve_format_precedence() {
        let mut opts = GlobalOptions {
            format: None,
            config: None,
            transport: None,
        };

        assert_eq!(opts.resolve_format(None), OutputFormat::Pretty);
        assert_eq!(opts.resolve_format(Some("table")), OutputFormat::Table);
        assert_eq!(opts.resolve_format(Some("bogus")), OutputFormat::Pretty);

        opts.format = Some(OutputFormat::Json);
        assert_eq!(opts.resolve_format(Some("table")), OutputFormat::Json);
    }
}
