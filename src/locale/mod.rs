//! Localized message rendering
//!
//! Ships a built-in English table and accepts overrides from a TOML file
//! mapping message keys to templates with `{placeholder}` interpolation.

use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::error::{Result, RosterError};

/// Built-in English templates; file-based tables override individual keys
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (
        "report.archive_reasons.default",
        "This chat room is no longer active",
    ),
    (
        "report.archive_reasons.policy_deleted",
        "This workspace chat is no longer active because {policyName} is no longer an active workspace",
    ),
    (
        "report.archive_reasons.removed_from_policy",
        "This workspace chat is no longer active because {displayName} is no longer a member of the {policyName} workspace",
    ),
    (
        "report.archive_reasons.account_merged",
        "This workspace chat is no longer active because {displayName} merged their account with {targetLogin}",
    ),
    ("report.archived_marker", " (archived)"),
];

/// On-disk shape of a locale override file
#[derive(Debug, Deserialize)]
struct LocaleFile {
    #[serde(default)]
    messages: AHashMap<String, String>,
}

/// Key-to-template message table
#[derive(Debug, Clone)]
pub struct Localizer {
    messages: AHashMap<String, String>,
}

impl Default for Localizer {
    fn default() -> Self {
        let messages = DEFAULT_MESSAGES
            .iter()
            .map(|(key, template)| (key.to_string(), template.to_string()))
            .collect();
        Self { messages }
    }
}

impl Localizer {
    /// Parse a TOML override table on top of the built-in defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let parsed: LocaleFile = toml::from_str(source)?;
        if parsed.messages.keys().any(|key| key.trim().is_empty()) {
            return Err(RosterError::Locale(
                "message keys must be non-empty".to_string(),
            ));
        }
        let mut localizer = Self::default();
        localizer.messages.extend(parsed.messages);
        Ok(localizer)
    }

    /// Load a TOML override file on top of the built-in defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RosterError::LocaleNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = std::fs::read_to_string(path).map_err(|e| RosterError::Io {
            source: e,
            context: format!("Failed to read locale file: {:?}", path),
        })?;
        Self::from_toml_str(&source)
    }

    /// Render a message, substituting `{name}` placeholders from `params`
    ///
    /// Unknown keys render as the key itself so missing translations stay
    /// visible instead of producing empty list rows.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = self.messages.get(key) else {
            return key.to_string();
        };
        let mut rendered = template.clone();
        for (name, value) in params {
            rendered = rendered.replace(&format!("{{{}}}", name), value);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_renders_archive_reason() {
        let localizer = Localizer::default();
        let message = localizer.translate(
            "report.archive_reasons.policy_deleted",
            &[("policyName", "Acme Inc")],
        );
        assert!(message.contains("Acme Inc"));
        assert!(!message.contains('{'));
    }

    #[test]
    fn test_unknown_key_renders_key() {
        let localizer = Localizer::default();
        assert_eq!(localizer.translate("missing.key", &[]), "missing.key");
    }

    #[test]
    fn test_toml_override_wins_and_defaults_survive() {
        let localizer = Localizer::from_toml_str(
            r#"
[messages]
"report.archive_reasons.default" = "Closed"
"#,
        )
        .unwrap();

        assert_eq!(
            localizer.translate("report.archive_reasons.default", &[]),
            "Closed"
        );
        // Untouched keys fall back to the built-in table
        assert_eq!(localizer.translate("report.archived_marker", &[]), " (archived)");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = Localizer::from_toml_str("messages = not-a-table");
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_keys_are_rejected() {
        let result = Localizer::from_toml_str(
            r#"
[messages]
" " = "blank"
"#,
        );
        assert!(matches!(result, Err(RosterError::Locale(_))));
    }

    #[test]
    fn test_multiple_params() {
        let localizer = Localizer::default();
        let message = localizer.translate(
            "report.archive_reasons.removed_from_policy",
            &[("displayName", "Alice"), ("policyName", "Acme Inc")],
        );
        assert!(message.contains("Alice"));
        assert!(message.contains("Acme Inc"));
    }
}
