//! JSON front-matter for exported Markdown files

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::Post;

/// Title written when a post has none
pub const DEFAULT_UNTITLED: &str = "Title Unknown";

/// Front-matter block written at the top of every exported file
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    pub date: String,
    pub slug: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Build the front-matter of a post, using `untitled` for an empty title
    pub fn from_post(post: &Post, untitled: &str) -> Self {
        let title = if post.title.is_empty() {
            untitled.to_string()
        } else {
            post.title.clone()
        };

        Self {
            title,
            description: post.description.clone(),
            date: post.date.clone(),
            slug: post.name.clone(),
            categories: post.category_names(),
            tags: post.tag_names(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the full file: front-matter, a blank line, then the body untouched
    pub fn render(&self, body: &str) -> serde_json::Result<String> {
        let mut out = self.to_json()?;
        out.push_str("\n\n");
        out.push_str(body);
        Ok(out)
    }

    /// Split an exported file into its front-matter and body
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();

        let fm = stream
            .next()
            .ok_or_else(|| anyhow!("Missing JSON front-matter"))?
            .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

        let rest = &content[stream.byte_offset()..];
        let body = rest.strip_prefix("\n\n").unwrap_or(rest);

        Ok((fm, body))
    }
}
