//! Registered inspector display model

use serde::Serialize;
use tabled::Tabled;

use crate::inspection::Inspector;

/// Row for `inspector list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InspectorDisplay {
    /// Registration order, starting at 1
    #[tabled(rename = "#")]
    pub order: usize,

    #[tabled(rename = "INSPECTOR")]
    pub id: String,

    #[tabled(rename = "CHECKS")]
    pub description: String,
}

impl InspectorDisplay {
    pub fn new(order: usize, inspector: &dyn Inspector) -> Self {
        Self {
            order,
            id: inspector.inspector_id().to_string(),
            description: inspector.description().to_string(),
        }
    }
}
