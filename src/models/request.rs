//! Request definition as edited by the user

use serde::{Deserialize, Serialize};

use super::auth::AuthConfig;

/// A request header row. Inactive rows are kept but not sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(default = "default_active")]
    pub active: bool,
}

/// A query parameter row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Request body with its declared content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default)]
    pub body: String,
}

/// Outgoing API request definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_method")]
    pub method: String,

    /// Target URL, possibly containing `<<variable>>` placeholders
    pub endpoint: String,

    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default)]
    pub params: Vec<Param>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,

    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Request {
    pub fn new(method: &str, endpoint: &str, auth: AuthConfig) -> Self {
        Self {
            name: String::new(),
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
            auth,
        }
    }

    /// Active headers paired with their row index.
    pub fn active_headers(&self) -> impl Iterator<Item = (usize, &Header)> {
        self.headers.iter().enumerate().filter(|(_, h)| h.active)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new(&default_method(), "", AuthConfig::default())
    }
}
