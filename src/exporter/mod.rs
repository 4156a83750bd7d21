//! Exporters turning a parsed [`Posts`] collection into files
//!
//! [`MarkdownExporter`] writes one `<slug>.md` file per item: pretty-printed
//! JSON front-matter, a blank line, then the raw post body.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ExportConfig, OnError};
use crate::content::{FrontMatter, Post, Posts};
use crate::error::ExportError;
use crate::helpers::join_path;

/// Common interface for exporters
pub trait Exporter {
    fn export(&self) -> Result<ExportReport, ExportError>;
}

/// Outcome of an export run
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written, in document order
    pub written: Vec<PathBuf>,
    /// Items left out by the post type filter
    pub skipped: usize,
    /// Failures recorded when exporting with [`OnError::Continue`]
    pub failed: Vec<ExportError>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes every post as Markdown with JSON front-matter
pub struct MarkdownExporter<'a> {
    posts: &'a Posts,
    dir: PathBuf,
    config: ExportConfig,
}

impl<'a> MarkdownExporter<'a> {
    /// Create an exporter writing to the current directory with default settings
    pub fn new(posts: &'a Posts) -> Self {
        Self::with_config(posts, ExportConfig::default())
    }

    pub fn with_config(posts: &'a Posts, config: ExportConfig) -> Self {
        Self {
            posts,
            dir: PathBuf::from("."),
            config,
        }
    }

    /// Set the output directory, creating it and its parents if needed
    pub fn set_dir_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        if !path.is_dir() {
            fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!("Created output directory {:?}", path);
        }
        self.dir = path.to_path_buf();
        Ok(())
    }

    pub fn dir_path(&self) -> &Path {
        &self.dir
    }

    /// Pick a unique file stem for every entry `(position, post, group)`
    ///
    /// Posts carrying a usable slug claim `<slug>` first, so a fallback stem
    /// derived from a title never takes the file of a post named that way.
    fn file_stems(entries: &[(usize, &Post, &str)]) -> Vec<String> {
        let reserved: HashSet<(&str, &str)> = entries
            .iter()
            .filter(|(_, post, _)| is_safe_segment(&post.name))
            .map(|(_, post, group)| (*group, post.name.as_str()))
            .collect();
        let mut used: HashSet<(String, String)> = HashSet::new();

        entries
            .iter()
            .map(|&(position, post, group)| {
                let fallback_id = if post.id.is_empty() {
                    (position + 1).to_string()
                } else {
                    post.id.clone()
                };
                let (stem, own) = preferred_stem(post, &fallback_id);

                let free = own || !reserved.contains(&(group, stem.as_str()));
                if free && used.insert((group.to_string(), stem.clone())) {
                    return stem;
                }

                let mut candidate = format!("{}-{}", stem, fallback_id);
                let mut n = 2;
                while reserved.contains(&(group, candidate.as_str()))
                    || !used.insert((group.to_string(), candidate.clone()))
                {
                    candidate = format!("{}-{}-{}", stem, fallback_id, n);
                    n += 1;
                }
                tracing::warn!("Slug \"{}\" is already taken, writing {}.md", stem, candidate);
                candidate
            })
            .collect()
    }

    fn group_dir(&self, post: &Post) -> String {
        if !self.config.group_by_type || post.post_type.is_empty() {
            return String::new();
        }
        if is_safe_segment(&post.post_type) {
            return post.post_type.clone();
        }

        let group = slug::slugify(&post.post_type);
        tracing::warn!(
            "Post type \"{}\" is not a valid directory name, using \"{}\"",
            post.post_type,
            group
        );
        group
    }

    /// Write one post; the target is replaced only once the whole file is on disk
    fn export_post(&self, post: &Post, group: &str, stem: &str) -> Result<PathBuf, ExportError> {
        let fm = FrontMatter::from_post(post, &self.config.untitled_title);
        let content = fm
            .render(&post.content)
            .map_err(|source| ExportError::FrontMatter {
                id: post.id.clone(),
                slug: stem.to_string(),
                source,
            })?;

        let file_name = format!("{}.md", stem);
        let path = self.dir.join(join_path(&[group, file_name.as_str()]));
        let write_err = |source| ExportError::Write {
            id: post.id.clone(),
            slug: stem.to_string(),
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = path.with_extension("md.tmp");
        fs::write(&tmp, content).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }

        tracing::debug!("Wrote {:?}", path);
        Ok(path)
    }
}

/// A single path segment that stays inside the output directory
fn is_safe_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && !s.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
}

/// File stem a post asks for, and whether it is the post's own slug
fn preferred_stem(post: &Post, fallback_id: &str) -> (String, bool) {
    if is_safe_segment(&post.name) {
        return (post.name.clone(), true);
    }

    let from_name = slug::slugify(&post.name);
    if !from_name.is_empty() {
        tracing::warn!(
            "Slug \"{}\" of post {} is not a valid file name, using \"{}\"",
            post.name,
            fallback_id,
            from_name
        );
        return (from_name, false);
    }

    let from_title = slug::slugify(&post.title);
    if from_title.is_empty() {
        (format!("post-{}", fallback_id), false)
    } else {
        tracing::debug!(
            "Post {} has no slug, using \"{}\" from its title",
            fallback_id,
            from_title
        );
        (from_title, false)
    }
}

impl Exporter for MarkdownExporter<'_> {
    fn export(&self) -> Result<ExportReport, ExportError> {
        let mut report = ExportReport::default();

        let mut entries = Vec::new();
        for (position, post) in self.posts.iter().enumerate() {
            if !self.config.includes_type(&post.post_type) {
                tracing::debug!("Skipping {} item {}", post.post_type, post.id);
                report.skipped += 1;
                continue;
            }
            entries.push((position, post, self.group_dir(post)));
        }

        let keys: Vec<(usize, &Post, &str)> = entries
            .iter()
            .map(|(position, post, group)| (*position, *post, group.as_str()))
            .collect();
        let stems = Self::file_stems(&keys);

        for ((_, post, group), stem) in keys.iter().zip(&stems) {
            match self.export_post(post, group, stem) {
                Ok(path) => report.written.push(path),
                Err(e) if self.config.on_error == OnError::Continue && e.is_per_post() => {
                    tracing::warn!("{}", e);
                    report.failed.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Exported {} posts to {:?} ({} skipped, {} failed)",
            report.written.len(),
            self.dir,
            report.skipped,
            report.failed.len()
        );

        Ok(report)
    }
}
