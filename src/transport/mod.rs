//! Network transport selection
//!
//! Tracks which transport (interceptor) dispatches requests and what the
//! platform's default transport is able to do. Inspections read this state;
//! they never change it.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransportError};
use crate::reactive::Signal;

/// Transport that runs in the browser and is bound by its restrictions.
pub const BROWSER_TRANSPORT_ID: &str = "browser";

/// Privileged local agent able to perform any handshake.
pub const AGENT_TRANSPORT_ID: &str = "agent";

/// Kind of transport a platform falls back to by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultTransportKind {
    /// In-browser transport; cannot do Digest handshakes or set cookies
    #[default]
    Browser,
    /// Desktop/native transport without browser restrictions
    Native,
}

impl DefaultTransportKind {
    pub fn is_constrained(self) -> bool {
        matches!(self, DefaultTransportKind::Browser)
    }

    pub fn default_transport_id(self) -> &'static str {
        match self {
            DefaultTransportKind::Browser => BROWSER_TRANSPORT_ID,
            DefaultTransportKind::Native => "native",
        }
    }
}

impl fmt::Display for DefaultTransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultTransportKind::Browser => f.write_str("browser"),
            DefaultTransportKind::Native => f.write_str("native"),
        }
    }
}

/// Capabilities of the execution environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTransport {
    pub default_kind: DefaultTransportKind,
    /// ID of the privileged, agent-style transport
    pub agent_transport_id: String,
}

impl Default for PlatformTransport {
    fn default() -> Self {
        Self {
            default_kind: DefaultTransportKind::Browser,
            agent_transport_id: AGENT_TRANSPORT_ID.to_string(),
        }
    }
}

/// A transport that can be selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportDescriptor {
    pub id: String,
    pub name: String,
    /// Whether a `Cookie` request header is sent as written
    pub supports_cookies: bool,
}

impl TransportDescriptor {
    fn new(id: &str, name: &str, supports_cookies: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            supports_cookies,
        }
    }
}

/// Built-in transports for a platform.
pub fn builtin_transports(platform: &PlatformTransport) -> Vec<TransportDescriptor> {
    let mut transports = match platform.default_kind {
        DefaultTransportKind::Browser => vec![
            TransportDescriptor::new(BROWSER_TRANSPORT_ID, "Browser", false),
            TransportDescriptor::new("proxy", "Proxy", true),
            TransportDescriptor::new("extension", "Browser extension", true),
        ],
        DefaultTransportKind::Native => {
            vec![TransportDescriptor::new("native", "Native", true)]
        }
    };

    if !transports.iter().any(|t| t.id == platform.agent_transport_id) {
        transports.push(TransportDescriptor::new(
            &platform.agent_transport_id,
            "Agent",
            true,
        ));
    }

    transports
}

/// Active transport state.
pub struct TransportService {
    platform: PlatformTransport,
    available: Vec<TransportDescriptor>,
    current: Signal<Option<String>>,
}

impl TransportService {
    /// Create the service with the platform default transport selected.
    pub fn new(platform: PlatformTransport) -> Self {
        let available = builtin_transports(&platform);
        let current = Some(platform.default_kind.default_transport_id().to_string());

        Self {
            platform,
            available,
            current: Signal::new(current),
        }
    }

    pub fn platform(&self) -> &PlatformTransport {
        &self.platform
    }

    pub fn available(&self) -> &[TransportDescriptor] {
        &self.available
    }

    pub fn find(&self, id: &str) -> Option<&TransportDescriptor> {
        self.available.iter().find(|t| t.id == id)
    }

    /// Reactive handle to the active transport ID.
    pub fn current(&self) -> &Signal<Option<String>> {
        &self.current
    }

    pub fn current_id(&self) -> Option<String> {
        self.current.get()
    }

    /// Select a transport by ID.
    pub fn set_current(&self, id: &str) -> Result<()> {
        if self.find(id).is_none() {
            return Err(TransportError::Unknown(id.to_string()).into());
        }

        info!("Active transport set to '{}'", id);
        self.current.set(Some(id.to_string()));
        Ok(())
    }

    /// Deselect the active transport.
    #[allow(dead_code)]
    pub fn clear(&self) {
        debug!("Active transport cleared");
        self.current.set(None);
    }

    /// True when a Digest handshake cannot be performed: the platform's
    /// default transport is the browser and the active transport is not the
    /// agent. Always false on platforms without that restriction.
    pub fn is_unsupported_for_digest(&self, current_id: &str) -> bool {
        self.platform.default_kind.is_constrained() && current_id != self.platform.agent_transport_id
    }

    /// Whether the given transport passes `Cookie` headers through.
    /// Unknown transports are assumed not to.
    pub fn supports_cookies(&self, id: &str) -> bool {
        self.find(id).is_some_and(|t| t.supports_cookies)
    }
}
