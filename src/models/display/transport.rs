//! Transport display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{truncate_string, yes_no};
use crate::transport::{TransportDescriptor, TransportService};

/// Row for `transport list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TransportDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Whether this transport is selected
    #[tabled(rename = "ACTIVE")]
    pub active: String,

    /// Whether Digest auth works through this transport
    #[tabled(rename = "DIGEST")]
    pub digest: String,

    #[tabled(rename = "COOKIES")]
    pub cookies: String,
}

impl TransportDisplay {
    pub fn new(transport: &TransportDescriptor, service: &TransportService) -> Self {
        let active = service.current_id().as_deref() == Some(transport.id.as_str());

        Self {
            id: transport.id.clone(),
            name: truncate_string(&transport.name, 30),
            active: yes_no(active),
            digest: yes_no(!service.is_unsupported_for_digest(&transport.id)),
            cookies: yes_no(transport.supports_cookies),
        }
    }
}
