//! wxr2md: convert WordPress WXR exports into Markdown files
//!
//! A WXR document is parsed into [`content::Posts`] (blog metadata plus
//! every item in document order), then [`exporter::MarkdownExporter`] writes
//! one `<slug>.md` file per item with a JSON front-matter block.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod exporter;
pub mod helpers;
pub mod wxr;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{Post, Posts};
pub use error::{ExportError, ParseError};
pub use exporter::{ExportReport, Exporter, MarkdownExporter};

/// The main application handle
#[derive(Clone)]
pub struct Wxr2Md {
    /// Export configuration
    pub config: config::ExportConfig,
    /// Base directory; relative paths resolve against it
    pub base_dir: PathBuf,
}

impl Wxr2Md {
    /// Create an instance for a directory, reading `wxr2md.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(config::CONFIG_FILE);

        let config = if config_path.exists() {
            config::ExportConfig::load(&config_path)?
        } else {
            config::ExportConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::ExportConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve a path against the base directory
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Output directory
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.output_dir)
    }

    /// Parse a WXR file
    pub fn load<P: AsRef<Path>>(&self, input: P) -> Result<Posts> {
        Ok(Posts::from_file(self.resolve(input))?)
    }

    /// Export every post of a WXR file
    pub fn export<P: AsRef<Path>>(&self, input: P) -> Result<ExportReport> {
        commands::export::run(self, input.as_ref())
    }

    /// List posts, categories or tags of a WXR file
    pub fn list<P: AsRef<Path>>(&self, input: P, kind: &str) -> Result<()> {
        commands::list::run(self, input.as_ref(), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = Wxr2Md::new(dir.path()).unwrap();
        assert_eq!(app.output_dir(), dir.path().join("export"));
    }

    #[test]
    fn test_new_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(config::CONFIG_FILE),
            "output_dir: /tmp/elsewhere\ngroup_by_type: true\n",
        )
        .unwrap();

        let app = Wxr2Md::new(dir.path()).unwrap();
        assert!(app.config.group_by_type);
        assert_eq!(app.output_dir(), PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_load_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let app = Wxr2Md::new(dir.path()).unwrap();
        let err = app.load("nope.xml").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::FileNotFound { .. })
        ));
    }
}
