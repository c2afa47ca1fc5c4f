use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RenderError, RenderResult};
use crate::theme::Theme;

pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Renderer configuration.
///
/// ```yaml
/// max_depth: 20
/// log_unknown: true
/// theme:
///   colors:
///     primary: "#3b82f6"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Nesting level past which subtrees are replaced by a capped placeholder.
    pub max_depth: usize,
    /// Emit a warning for each unknown module type encountered.
    pub log_unknown: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            log_unknown: true,
            theme: Theme::default(),
        }
    }
}

impl RenderOptions {
    pub fn from_yaml_str(yaml: &str) -> RenderResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> RenderResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| RenderError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(RenderError::UnsupportedConfigFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let opts = RenderOptions::from_yaml_str("max_depth: 5\n").unwrap();
        assert_eq!(opts.max_depth, 5);
        assert!(opts.log_unknown);
        assert!(opts.theme.colors.is_empty());
    }

    #[test]
    fn test_yaml_with_theme() {
        let yaml = "log_unknown: false\ntheme:\n  colors:\n    primary: \"#3b82f6\"\n";
        let opts = RenderOptions::from_yaml_str(yaml).unwrap();
        assert!(!opts.log_unknown);
        assert_eq!(opts.theme.map_color("#3b82f6"), "var(--color-primary)");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(RenderOptions::from_yaml_str("").unwrap(), RenderOptions::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            RenderOptions::from_yaml_str("max_depth: [oops"),
            Err(RenderError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join("jtb-render-options-test.toml");
        fs::write(&path, "max_depth = 3").unwrap();
        let result = RenderOptions::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(RenderError::UnsupportedConfigFormat { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RenderOptions::load(Path::new("/nonexistent/jtb/options.yaml"));
        assert!(matches!(result, Err(RenderError::Io { .. })));
    }
}
