//! Export configuration (wxr2md.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::DEFAULT_UNTITLED;

/// Config file looked up in the base directory
pub const CONFIG_FILE: &str = "wxr2md.yml";

/// What the exporter does when a post cannot be written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop at the first failing post
    #[default]
    Abort,
    /// Record the failure and keep exporting the remaining posts
    Continue,
}

/// Main export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory, relative to the base directory unless absolute
    pub output_dir: String,

    /// Title written for posts that have none
    pub untitled_title: String,

    pub on_error: OnError,

    /// Only export items of these post types; empty means every item
    pub post_types: Vec<String>,

    /// Write each item under a sub-directory named after its post type
    pub group_by_type: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: "export".to_string(),
            untitled_title: DEFAULT_UNTITLED.to_string(),
            on_error: OnError::Abort,
            post_types: Vec::new(),
            group_by_type: false,
        }
    }
}

impl ExportConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: ExportConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Whether items of this post type are exported
    pub fn includes_type(&self, post_type: &str) -> bool {
        self.post_types.is_empty() || self.post_types.iter().any(|t| t == post_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, "export");
        assert_eq!(config.untitled_title, "Title Unknown");
        assert_eq!(config.on_error, OnError::Abort);
        assert!(config.includes_type("attachment"));
        assert!(!config.group_by_type);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
output_dir: content/posts
on_error: continue
post_types:
  - post
  - page
"#;
        let config: ExportConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output_dir, "content/posts");
        assert_eq!(config.on_error, OnError::Continue);
        assert_eq!(config.untitled_title, "Title Unknown");
        assert!(config.includes_type("page"));
        assert!(!config.includes_type("attachment"));
    }

    #[test]
    fn test_load_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "on_error: sometimes\n").unwrap();
        assert!(ExportConfig::load(&path).is_err());
        assert!(ExportConfig::load(dir.path().join("missing.yml")).is_err());
    }
}
