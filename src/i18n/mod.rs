//! Message localization
//!
//! Messages are looked up by dotted key (`authorization.digest.inspector_warning`)
//! in a nested YAML table. The English table is compiled in; a user-supplied
//! file may override individual keys.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use crate::error::{ConfigError, Result};

const EN: &str = include_str!("en.yaml");

/// Key-to-message lookup. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    messages: BTreeMap<String, String>,
}

impl Translator {
    /// Translator backed by the built-in English messages.
    ///
    /// A malformed table is logged and leaves every key echoing itself.
    pub fn english() -> Self {
        match parse_messages(EN) {
            Ok(messages) => Self { messages },
            Err(err) => {
                warn!("Built-in message table is invalid: {}", err);
                Self::default()
            }
        }
    }

    /// Built-in messages with overrides from a YAML file.
    pub fn with_overrides(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut translator = Self::english();
        translator.merge_yaml(&contents)?;
        debug!("Loaded message overrides from {}", path.display());
        Ok(translator)
    }

    /// Merge messages from a YAML string, replacing existing keys.
    pub fn merge_yaml(&mut self, contents: &str) -> Result<()> {
        self.messages.extend(parse_messages(contents)?);
        Ok(())
    }

    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

/// Flatten a nested YAML table into dotted keys.
fn parse_messages(contents: &str) -> Result<BTreeMap<String, String>> {
    let value: serde_yaml::Value = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
    let mut messages = BTreeMap::new();
    flatten_into(&mut messages, String::new(), &value);
    Ok(messages)
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: String, value: &serde_yaml::Value) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let Some(k) = k.as_str() else { continue };
                let key = if prefix.is_empty() {
                    k.to_string()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_into(out, key, v);
            }
        }
        serde_yaml::Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        serde_yaml::Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        serde_yaml::Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_messages_parse() {
        let t = Translator::english();
        assert!(t.len() >= 3);
        assert_eq!(t.t("action.learn_more"), "Learn more");
        assert!(t.t("authorization.digest.inspector_warning").contains("Digest"));
    }

    #[test]
    fn test_bundled_table_has_every_message_key() {
        let messages = parse_messages(EN).unwrap();

        for key in [
            "action.learn_more",
            "authorization.digest.inspector_warning",
            "inspections.header.cookie",
            "inspections.none",
        ] {
            assert!(messages.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_malformed_table_is_an_error() {
        assert!(parse_messages("action: [learn_more").is_err());
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        let t = Translator::english();
        assert_eq!(t.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_merge_overrides_single_key() {
        let mut t = Translator::english();
        t.merge_yaml("action:\n  learn_more: En savoir plus\n").unwrap();

        assert_eq!(t.t("action.learn_more"), "En savoir plus");
        assert!(t.t("inspections.header.cookie").contains("Cookie"));
    }

    #[test]
    fn test_with_overrides_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "authorization:\n  digest:\n    inspector_warning: custom").unwrap();

        let t = Translator::with_overrides(file.path()).unwrap();
        assert_eq!(t.t("authorization.digest.inspector_warning"), "custom");
    }

    #[test]
    fn test_merge_rejects_invalid_yaml() {
        let mut t = Translator::english();
        assert!(t.merge_yaml("a: [b: c").is_err());
    }
}
