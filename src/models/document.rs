//! Request documents: the unit a tab edits

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::auth::{AuthConfig, AuthType};
use super::request::Request;
use crate::error::{DocumentError, Result};

/// What kind of document a tab holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// A live, editable request inside (or outside) a collection
    Request,
    /// A saved example response; its request is a read-only snapshot
    ExampleResponse,
}

/// Authorization resolved from the nearest ancestor that defines one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritedAuth {
    /// ID of the collection or folder the auth was taken from
    #[serde(default, rename = "parentID")]
    pub parent_id: String,

    #[serde(default)]
    pub parent_name: String,

    pub inherited_auth: AuthConfig,
}

/// Snapshot of configuration resolved up the collection hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InheritedProperties {
    pub auth: InheritedAuth,
}

impl InheritedProperties {
    #[allow(dead_code)]
    pub fn from_auth_type(auth_type: AuthType) -> Self {
        Self {
            auth: InheritedAuth {
                parent_id: String::new(),
                parent_name: String::new(),
                inherited_auth: AuthConfig::new(auth_type),
            },
        }
    }

    /// Nearest concrete auth type above the request, or `none` when no
    /// ancestor defines one.
    pub fn inherited_auth_type(&self) -> AuthType {
        self.auth.inherited_auth.auth_type
    }
}

/// Editable unit: a request plus the context it lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDocument {
    #[serde(rename = "type")]
    pub kind: DocumentKind,

    pub request: Request,

    /// Present only when the document sits in a collection hierarchy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_properties: Option<InheritedProperties>,
}

impl RequestDocument {
    pub fn request(request: Request) -> Self {
        Self {
            kind: DocumentKind::Request,
            request,
            inherited_properties: None,
        }
    }

    #[allow(dead_code)]
    pub fn example_response(request: Request) -> Self {
        Self {
            kind: DocumentKind::ExampleResponse,
            request,
            inherited_properties: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_inherited(mut self, inherited: InheritedProperties) -> Self {
        self.inherited_properties = Some(inherited);
        self
    }

    pub fn is_example_response(&self) -> bool {
        self.kind == DocumentKind::ExampleResponse
    }

    /// Load a document from a YAML or JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a document. JSON input is accepted since it is valid YAML.
    pub fn parse(contents: &str) -> Result<Self> {
        let document = serde_yaml::from_str(contents).map_err(DocumentError::from)?;
        Ok(document)
    }
}

impl Default for RequestDocument {
    fn default() -> Self {
        Self::request(Request::default())
    }
}
