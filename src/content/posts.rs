//! Blog-level data and the ordered post collection

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;

use super::Post;
use crate::error::ParseError;

/// A category declared at channel level (`wp:category`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTerm {
    pub term_id: String,
    pub nicename: String,
    /// Nicename of the parent category, empty for top-level ones
    pub parent: String,
    pub name: String,
}

/// A tag declared at channel level (`wp:tag`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTerm {
    pub term_id: String,
    pub slug: String,
    pub name: String,
}

/// Everything extracted from one WXR document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Posts {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub language: String,
    pub base_site_url: String,
    pub base_blog_url: String,
    pub categories: Vec<CategoryTerm>,
    pub tags: Vec<TagTerm>,
    pub posts: Vec<Post>,
}

impl Posts {
    /// Parse a WXR document held in memory
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(document: &str) -> Result<Self, ParseError> {
        crate::wxr::parse(document)
    }

    /// Read and parse a WXR file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ParseError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let document = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Read {} bytes from {:?}", document.len(), path);
        Self::from_str(&document)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Find a post by slug
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.name == slug)
    }

    /// JSON value with every field, keys in a fixed order
    pub fn to_json_value(&self) -> serde_json::Value {
        let categories: Vec<serde_json::Value> = self
            .categories
            .iter()
            .map(|c| {
                json!({
                    "term_id": c.term_id,
                    "nicename": c.nicename,
                    "parent": c.parent,
                    "name": c.name,
                })
            })
            .collect();
        let tags: Vec<serde_json::Value> = self
            .tags
            .iter()
            .map(|t| json!({ "term_id": t.term_id, "slug": t.slug, "name": t.name }))
            .collect();
        let posts: Vec<serde_json::Value> = self.posts.iter().map(Post::to_json_value).collect();

        json!({
            "title": self.title,
            "link": self.link,
            "description": self.description,
            "pub_date": self.pub_date,
            "language": self.language,
            "base_site_url": self.base_site_url,
            "base_blog_url": self.base_blog_url,
            "categories": categories,
            "tags": tags,
            "posts": posts,
        })
    }

    /// Pretty-printed JSON dump of the whole export
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_json_value())
    }
}

impl<'a> IntoIterator for &'a Posts {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wxr::SAMPLE;

    #[test]
    fn test_from_file_missing() {
        let err = Posts::from_file("/definitely/not/here.xml").unwrap_err();
        assert!(matches!(err, ParseError::FileNotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.xml"));
    }

    #[test]
    fn test_from_file_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Posts::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInput));
    }

    #[test]
    fn test_from_file_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.xml");
        std::fs::write(&path, SAMPLE).unwrap();

        let posts = Posts::from_file(&path).unwrap();
        assert_eq!(posts, Posts::from_str(SAMPLE).unwrap());
    }

    #[test]
    fn test_iteration_and_lookup() {
        let posts = Posts::from_str(SAMPLE).unwrap();
        let names: Vec<&str> = (&posts).into_iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["hello-world", "second-post", "", "about"]);
        assert_eq!(posts.len(), 4);
        assert!(!posts.is_empty());
        assert_eq!(posts.get("about").unwrap().post_type, "page");
        assert!(posts.get("nope").is_none());
    }

    #[test]
    fn test_json_dump_is_complete_and_ordered() {
        let posts = Posts::from_str(SAMPLE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&posts.to_json().unwrap()).unwrap();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "link",
                "description",
                "pub_date",
                "language",
                "base_site_url",
                "base_blog_url",
                "categories",
                "tags",
                "posts"
            ]
        );
        assert_eq!(value["posts"].as_array().unwrap().len(), 4);
        assert_eq!(value["categories"][1]["parent"], "misc");
        assert_eq!(value["tags"][0]["slug"], "rust");
    }
}
