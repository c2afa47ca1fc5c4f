use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RenderResult;

/// Active site theme palette. Colors matching a palette entry are emitted as
/// CSS variables so a theme switch restyles rendered modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct ThemeFile {
    #[serde(default)]
    colors: Option<BTreeMap<String, String>>,
    #[serde(default)]
    config: Option<ThemeConfigSection>,
}

#[derive(Deserialize)]
struct ThemeConfigSection {
    #[serde(default)]
    colors: Option<BTreeMap<String, String>>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `theme.json`; colors may sit at the root or under `config`.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let file: ThemeFile = serde_json::from_str(json)?;
        let colors = file
            .colors
            .filter(|c| !c.is_empty())
            .or_else(|| file.config.and_then(|c| c.colors))
            .unwrap_or_default();
        Ok(Theme { colors })
    }

    /// Resolve a theme variable reference (e.g., "$theme.colors.primary")
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let key = reference.strip_prefix("$theme.colors.")?;
        self.colors
            .contains_key(key)
            .then(|| format!("var(--color-{})", key))
    }

    pub fn is_theme_reference(value: &str) -> bool {
        value.starts_with("$theme.")
    }

    /// Map a literal color onto the palette's CSS variable when one matches.
    pub fn map_color(&self, color: &str) -> String {
        if color.is_empty() || color.starts_with("var(") {
            return color.to_string();
        }
        if Self::is_theme_reference(color) {
            return self.resolve(color).unwrap_or_else(|| color.to_string());
        }
        let lower = color.to_lowercase();
        self.colors
            .iter()
            .find(|(_, hex)| hex.to_lowercase() == lower)
            .map(|(key, _)| format!("var(--color-{})", key))
            .unwrap_or_else(|| color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> Theme {
        let mut theme = Theme::new();
        theme.colors.insert("primary".to_string(), "#3B82F6".to_string());
        theme.colors.insert("text".to_string(), "#111827".to_string());
        theme
    }

    #[test]
    fn test_theme_resolve_colors() {
        let theme = sample_theme();
        assert_eq!(
            theme.resolve("$theme.colors.primary"),
            Some("var(--color-primary)".to_string())
        );
        assert_eq!(theme.resolve("$theme.colors.unknown"), None);
        assert_eq!(theme.resolve("$theme.spacing.small"), None);
    }

    #[test]
    fn test_map_color_matches_case_insensitively() {
        let theme = sample_theme();
        assert_eq!(theme.map_color("#3b82f6"), "var(--color-primary)");
        assert_eq!(theme.map_color("#ff0000"), "#ff0000");
        assert_eq!(theme.map_color("var(--x)"), "var(--x)");
        assert_eq!(theme.map_color("$theme.colors.text"), "var(--color-text)");
    }

    #[test]
    fn test_empty_theme_is_identity() {
        assert_eq!(Theme::new().map_color("#111827"), "#111827");
    }

    #[test]
    fn test_from_json_root_and_config_colors() {
        let root = Theme::from_json(r##"{"colors":{"accent":"#f59e0b"}}"##).unwrap();
        assert_eq!(root.colors.get("accent").map(String::as_str), Some("#f59e0b"));

        let nested = Theme::from_json(r##"{"name":"jessie","config":{"colors":{"bg":"#fff"}}}"##).unwrap();
        assert_eq!(nested.colors.get("bg").map(String::as_str), Some("#fff"));
    }

    #[test]
    fn test_is_theme_reference() {
        assert!(Theme::is_theme_reference("$theme.colors.primary"));
        assert!(!Theme::is_theme_reference("#4a90e2"));
    }
}
