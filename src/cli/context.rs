//! Command execution context
//!
//! Composition root for a command run: loads config, builds the services the
//! inspectors read, and registers the built-in inspectors with a fresh
//! registry.

use std::rc::Rc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::i18n::Translator;
use crate::inspection::{AuthorizationInspector, HeaderInspector, InspectionRegistry};
use crate::models::RequestDocument;
use crate::tabs::TabService;
use crate::transport::TransportService;

/// Services shared by command handlers.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
    pub registry: Rc<InspectionRegistry>,
    pub authorization: Rc<AuthorizationInspector>,
    pub tabs: Rc<TabService>,
    pub transport: Rc<TransportService>,
    pub i18n: Rc<Translator>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or default location), defaults if absent
    /// - Loading message overrides when `locale_file` is set
    /// - Selecting the transport: `--transport` > config > platform default
    /// - Registering inspectors in reporting order
    ///
    /// # Errors
    /// Returns error if the config or locale file cannot be parsed, or the
    /// selected transport is unknown on the configured platform.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;
        let format = opts.resolve_format(config.preferences.format.as_deref());

        let i18n = Rc::new(match &config.locale_file {
            Some(path) => Translator::with_overrides(path)?,
            None => Translator::english(),
        });
        debug!("{} message(s) loaded", i18n.len());

        let transport = Rc::new(TransportService::new(config.platform.to_platform()));
        if let Some(id) = opts.transport_ref().or(config.transport.current.as_deref()) {
            transport.set_current(id)?;
        }
        debug!(
            "Platform default: {}, active transport: {:?}",
            transport.platform().default_kind,
            transport.current_id()
        );

        let tabs = Rc::new(TabService::new(RequestDocument::default()));
        let registry = Rc::new(InspectionRegistry::new());

        let authorization =
            AuthorizationInspector::init(&registry, tabs.clone(), transport.clone(), i18n.clone())?;
        HeaderInspector::init(&registry, transport.clone(), i18n.clone())?;

        Ok(Self {
            config,
            format,
            registry,
            authorization,
            tabs,
            transport,
            i18n,
        })
    }
}
