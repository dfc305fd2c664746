use crate::domain::model::{Document, Item};
use crate::domain::ports::Clock;
use crate::utils::error::{FixtureError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    pub document: DocumentConfig,
    #[serde(default)]
    pub items: Vec<Item>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Default for FixtureConfig {
    /// The built-in fixture printed when no config file is given.
    fn default() -> Self {
        Self {
            document: DocumentConfig {
                name: "Sample Go Document".to_string(),
                version: "1.0.0".to_string(),
                description: "A sample document for testing".to_string(),
            },
            items: vec![
                Item::new(1, "First Item", true, 29.99, &["electronics", "gadgets"]),
                Item::new(2, "Second Item", false, 49.99, &["books", "education"]),
            ],
            logging: None,
        }
    }
}

impl FixtureConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| FixtureError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// Runs the document factory, then appends the configured items in order.
    pub fn build_document(&self, clock: &dyn Clock) -> Document {
        let mut doc = Document::created_at(
            &self.document.name,
            &self.document.version,
            &self.document.description,
            clock.now(),
        );
        for item in &self.items {
            doc.add_item(item.clone());
        }
        doc
    }
}

fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
fn substitute_env_vars(content: &str) -> String {
    env_placeholder()
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    const SAMPLE: &str = r#"
[document]
name = "Inline"
version = "0.2.0"

[[items]]
id = 5
name = "Only"
active = true
price = 1.25
categories = ["misc"]

[[items]]
id = 5
name = "Dupe"
active = true
price = 2.5

[logging]
level = "debug"
"#;

    #[test]
    fn test_parse_items_in_order() {
        let config = FixtureConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.document.description, "");
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[1].name, "Dupe");
        assert!(config.items[1].categories.is_empty());
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_build_document_uses_clock() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let doc = FixtureConfig::from_toml_str(SAMPLE)
            .unwrap()
            .build_document(&FixedClock(at));
        assert_eq!(doc.metadata.created, "2025-01-02T03:04:05Z");
        assert_eq!(doc.describe(), "Document{Name: Inline, Version: 0.2.0, Items: 2}");
        assert!((doc.total_price() - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let out = substitute_env_vars("name = \"${SAMPLE_DOC_SURELY_UNSET_VAR}\"");
        assert_eq!(out, "name = \"${SAMPLE_DOC_SURELY_UNSET_VAR}\"");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = FixtureConfig::from_toml_str("[document\nname =").unwrap_err();
        assert!(matches!(err, FixtureError::ConfigParseError { ref path, .. } if path == "<inline>"));
    }

    #[test]
    fn test_default_is_builtin_fixture() {
        let config = FixtureConfig::default();
        assert_eq!(config.document.name, "Sample Go Document");
        assert_eq!(config.items.len(), 2);
        assert!(config.log_level().is_none());
    }
}
