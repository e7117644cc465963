//! Authorization configuration attached to requests and collections

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Authorization scheme selected on a request or a parent scope.
///
/// `Inherit` is not a concrete scheme; it defers to the nearest ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthType {
    None,
    Basic,
    Bearer,
    Digest,
    #[serde(rename = "oauth-2")]
    OAuth2,
    ApiKey,
    AwsSignature,
    Hawk,
    AkamaiEg,
    Jwt,
    Inherit,
}

impl AuthType {
    pub fn is_inherit(self) -> bool {
        matches!(self, AuthType::Inherit)
    }

    /// Wire name, as used in request files.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::Basic => "basic",
            AuthType::Bearer => "bearer",
            AuthType::Digest => "digest",
            AuthType::OAuth2 => "oauth-2",
            AuthType::ApiKey => "api-key",
            AuthType::AwsSignature => "aws-signature",
            AuthType::Hawk => "hawk",
            AuthType::AkamaiEg => "akamai-eg",
            AuthType::Jwt => "jwt",
            AuthType::Inherit => "inherit",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization block of a request or collection.
///
/// Credential fields are specific to each scheme and are carried through
/// untouched; inspections only look at `auth_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub auth_type: AuthType,

    #[serde(default = "default_auth_active")]
    pub auth_active: bool,

    #[serde(flatten)]
    pub credentials: BTreeMap<String, serde_yaml::Value>,
}

fn default_auth_active() -> bool {
    true
}

impl AuthConfig {
    pub fn new(auth_type: AuthType) -> Self {
        Self {
            auth_type,
            auth_active: true,
            credentials: BTreeMap::new(),
        }
    }

    #[allow(dead_code)]
    pub fn inherit() -> Self {
        Self::new(AuthType::Inherit)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(AuthType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_wire_names() {
        let parsed: AuthType = serde_yaml::from_str("oauth-2").unwrap();
        assert_eq!(parsed, AuthType::OAuth2);

        let parsed: AuthType = serde_yaml::from_str("api-key").unwrap();
        assert_eq!(parsed, AuthType::ApiKey);

        assert_eq!(AuthType::AkamaiEg.to_string(), "akamai-eg");
    }

    #[test]
    fn test_auth_config_keeps_credentials() {
        let yaml = "authType: digest\nusername: alice\npassword: secret\n";
        let auth: AuthConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(auth.auth_type, AuthType::Digest);
        assert!(auth.auth_active);
        assert_eq!(
            auth.credentials.get("username"),
            Some(&serde_yaml::Value::String("alice".to_string()))
        );
    }

    #[test]
    fn test_only_inherit_is_inherit() {
        assert!(AuthType::Inherit.is_inherit());
        assert!(!AuthType::None.is_inherit());
        assert!(!AuthConfig::default().auth_type.is_inherit());
        assert!(AuthConfig::inherit().auth_type.is_inherit());
    }
}
