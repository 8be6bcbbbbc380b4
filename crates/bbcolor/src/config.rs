use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

use crate::AnyError;

/// Serializable defaults for a [`ColorFormatter`](crate::ColorFormatter).
///
/// Every field is optional; an absent field leaves the formatter's own
/// default in place.
#[derive(Eq, PartialEq, Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Overrides terminal detection when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<i64>,
    /// Comma-separated style spec, e.g. `"bold,underline"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl FormatterConfig {
    pub fn from_json(text: &str) -> Result<Self, AnyError> {
        serde_json::from_str(text).context("Failed to parse formatter config")
    }

    pub fn to_json(&self) -> Result<String, AnyError> {
        serde_json::to_string(self).context("Failed to serialize formatter config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_full_config() {
        let config = FormatterConfig::from_json(
            r#"{"color": true, "foreground": 160, "background": 17, "style": "bold,underline"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            FormatterConfig {
                color: Some(true),
                foreground: Some(160),
                background: Some(17),
                style: Some("bold,underline".to_string()),
            }
        );
    }

    #[test]
    fn missing_fields_default_to_none() {
        assert_eq!(FormatterConfig::from_json("{}").unwrap(), FormatterConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(FormatterConfig::from_json(r#"{"italic": true}"#).is_err());
    }

    #[test]
    fn out_of_range_colors_still_parse() {
        // Range checks happen when the config is applied to a formatter.
        let config = FormatterConfig::from_json(r#"{"foreground": 300}"#).unwrap();
        assert_eq!(config.foreground, Some(300));
    }

    #[test]
    fn to_json_skips_unset_fields() {
        let config = FormatterConfig {
            foreground: Some(4),
            ..Default::default()
        };
        assert_eq!(config.to_json().unwrap(), r#"{"foreground":4}"#);
    }
}
