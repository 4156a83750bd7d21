//! Post model

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Taxonomy domain of WordPress categories
pub const CATEGORY_DOMAIN: &str = "category";

/// Taxonomy domain of WordPress tags
pub const TAG_DOMAIN: &str = "post_tag";

/// A term attached to a single post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermAssignment {
    pub nicename: String,
    /// Display name
    pub name: String,
    /// Taxonomy domain, kept verbatim (`category`, `post_tag`, ...)
    #[serde(rename = "type")]
    pub domain: String,
}

/// A single `item` of the export: a post, page, attachment or any other post type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,

    pub link: String,

    /// Publication date as written by the RSS layer (`pubDate`)
    pub pub_date: String,

    pub guid: String,

    pub description: String,

    /// WordPress post id
    pub id: String,

    /// Local publication date (`YYYY-MM-DD HH:MM:SS`)
    pub date: String,

    pub date_gmt: String,

    /// Slug
    pub name: String,

    pub status: String,

    /// Post type (`post`, `page`, `attachment`, ...)
    #[serde(rename = "type")]
    pub post_type: String,

    pub is_sticky: String,

    pub password: String,

    pub creator: String,

    /// Raw body, usually HTML
    pub content: String,

    pub excerpt: String,

    /// Categories and tags, in document order
    pub categories: Vec<TermAssignment>,
}

impl Post {
    /// Display names of the terms in a taxonomy domain, in document order
    pub fn terms_in<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.categories
            .iter()
            .filter(move |t| t.domain == domain)
            .map(|t| t.name.as_str())
    }

    pub fn category_names(&self) -> Vec<String> {
        self.terms_in(CATEGORY_DOMAIN).map(str::to_string).collect()
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.terms_in(TAG_DOMAIN).map(str::to_string).collect()
    }

    /// JSON value with every field, keys in a fixed order
    pub fn to_json_value(&self) -> serde_json::Value {
        let categories: Vec<serde_json::Value> = self
            .categories
            .iter()
            .map(|t| json!({ "nicename": t.nicename, "name": t.name, "type": t.domain }))
            .collect();

        json!({
            "title": self.title,
            "link": self.link,
            "pub_date": self.pub_date,
            "guid": self.guid,
            "description": self.description,
            "id": self.id,
            "date": self.date,
            "date_gmt": self.date_gmt,
            "name": self.name,
            "status": self.status,
            "type": self.post_type,
            "is_sticky": self.is_sticky,
            "password": self.password,
            "creator": self.creator,
            "content": self.content,
            "excerpt": self.excerpt,
            "categories": categories,
        })
    }

    /// Pretty-printed JSON dump of the post
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_json_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, domain: &str) -> TermAssignment {
        TermAssignment {
            nicename: slug::slugify(name),
            name: name.to_string(),
            domain: domain.to_string(),
        }
    }

    #[test]
    fn test_terms_split_by_domain() {
        let post = Post {
            categories: vec![
                term("Misc", CATEGORY_DOMAIN),
                term("rust", TAG_DOMAIN),
                term("Travel", CATEGORY_DOMAIN),
                term("Featured", "post_format"),
            ],
            ..Default::default()
        };

        assert_eq!(post.category_names(), vec!["Misc", "Travel"]);
        assert_eq!(post.tag_names(), vec!["rust"]);
        assert_eq!(
            post.terms_in("post_format").collect::<Vec<_>>(),
            vec!["Featured"]
        );
    }

    #[test]
    fn test_json_keys_in_fixed_order() {
        let post = Post {
            title: "Hello".to_string(),
            post_type: "post".to_string(),
            categories: vec![term("Misc", CATEGORY_DOMAIN)],
            ..Default::default()
        };

        let value = post.to_json_value();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.first(), Some(&"title"));
        assert_eq!(keys.last(), Some(&"categories"));
        assert_eq!(keys.len(), 17);
        assert_eq!(value["type"], "post");
        assert_eq!(value["categories"][0]["type"], "category");

        let text = post.to_json().unwrap();
        assert!(text.starts_with("{\n  \"title\": \"Hello\""));
    }
}
