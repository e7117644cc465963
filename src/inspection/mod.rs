//! Request inspections
//!
//! An [`Inspector`] looks at a request before it is sent and reports zero or
//! more [`InspectionResult`]s. Inspectors register themselves with the
//! [`InspectionRegistry`] when they are constructed; callers ask the registry
//! for the merged results of every inspector for a given request.
//!
//! Results are derived values. They are rebuilt whenever an input an
//! inspector reads changes and are never mutated after creation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Request;
use crate::reactive::{Computed, Signal};

pub mod inspectors;
pub mod registry;

pub use inspectors::{AuthorizationInspector, HeaderInspector};
pub use registry::InspectionRegistry;

/// Documentation page shared by the built-in inspectors.
pub const INSPECTIONS_DOC_LINK: &str = "https://docs.hoppscotch.io/documentation/features/inspections";

/// Finding severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Numeric level used by diagnostics UIs: 1 info, 2 warning, 3 error.
    pub fn level(self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a key/value row a finding points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPosition {
    Key,
    Value,
}

/// Part of the request a finding applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InspectionLocation {
    Url,
    Header {
        position: RowPosition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    Parameter {
        position: RowPosition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    BodyContentTypeHeader,
    Body,
    Auth,
    Response,
}

impl InspectionLocation {
    /// Location tag without row details.
    pub fn kind(&self) -> &'static str {
        match self {
            InspectionLocation::Url => "url",
            InspectionLocation::Header { .. } => "header",
            InspectionLocation::Parameter { .. } => "parameter",
            InspectionLocation::BodyContentTypeHeader => "body-content-type-header",
            InspectionLocation::Body => "body",
            InspectionLocation::Auth => "auth",
            InspectionLocation::Response => "response",
        }
    }
}

impl fmt::Display for InspectionLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionLocation::Header {
                key: Some(key), ..
            }
            | InspectionLocation::Parameter {
                key: Some(key), ..
            } => write!(f, "{} ({})", self.kind(), key),
            _ => f.write_str(self.kind()),
        }
    }
}

/// Link to further reading attached to a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLink {
    /// Link label, already localized
    pub text: String,
    pub link: String,
}

/// A single diagnostic finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionResult {
    /// Unique within one inspector's output, for UI reconciliation
    pub id: String,

    /// Localized message
    pub text: String,

    pub severity: Severity,

    /// Results flagged as not applicable are dropped from aggregates
    pub is_applicable: bool,

    pub locations: InspectionLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocLink>,
}

/// A diagnostic rule over a request.
///
/// Implementations hold no mutable state of their own. `get_inspections`
/// returns a derivation that stays current as the request and any service
/// the inspector reads change.
pub trait Inspector {
    /// Stable, unique identifier used for registration
    fn inspector_id(&self) -> &str;

    /// One-line summary shown by `inspector list`
    fn description(&self) -> &str;

    fn get_inspections(&self, request: &Signal<Request>) -> Computed<Vec<InspectionResult>>;
}

/// Most severe finding in `results`, if any.
pub fn highest_severity(results: &[InspectionResult]) -> Option<Severity> {
    results.iter().map(|r| r.severity).max()
}
