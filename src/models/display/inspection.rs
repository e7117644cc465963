//! Inspection finding display model

use serde::Serialize;
use tabled::Tabled;

use crate::inspection::InspectionResult;

/// Finding row for `inspect` table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InspectionDisplay {
    /// Severity (info, warning, error)
    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    /// Part of the request the finding points at
    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Localized message
    #[tabled(rename = "MESSAGE")]
    pub message: String,

    /// Documentation link
    #[tabled(rename = "DOCS")]
    pub docs: String,
}

impl From<&InspectionResult> for InspectionDisplay {
    fn from(result: &InspectionResult) -> Self {
        Self {
            severity: result.severity.to_string(),
            location: result.locations.to_string(),
            message: result.text.clone(),
            docs: result
                .doc
                .as_ref()
                .map(|d| d.link.clone())
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<InspectionResult> for InspectionDisplay {
    fn from(result: InspectionResult) -> Self {
        InspectionDisplay::from(&result)
    }
}
