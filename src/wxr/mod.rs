//! WXR (WordPress eXtended RSS) parsing
//!
//! The document is read into a small element tree, then the mapping tables in
//! [`schema`] turn the `channel` and its `item`s into [`Posts`].

pub mod node;
pub mod schema;

use crate::content::{CategoryTerm, Posts, TagTerm};
use crate::error::ParseError;
use node::Element;

/// Parse a WXR document
pub fn parse(document: &str) -> Result<Posts, ParseError> {
    if document.trim().is_empty() {
        return Err(ParseError::InvalidInput);
    }

    let root = node::parse_document(document)?;
    let channel = find_channel(&root)?;

    let mut posts: Posts = schema::extract(channel);
    posts.categories = channel
        .children_named(Some(schema::WP), "category")
        .map(schema::extract::<CategoryTerm>)
        .collect();
    posts.tags = channel
        .children_named(Some(schema::WP), "tag")
        .map(schema::extract::<TagTerm>)
        .collect();
    posts.posts = channel
        .children_named(None, "item")
        .map(schema::post)
        .collect();

    tracing::debug!(
        "Parsed \"{}\": {} categories, {} tags, {} items",
        posts.title,
        posts.categories.len(),
        posts.tags.len(),
        posts.posts.len()
    );

    Ok(posts)
}

fn find_channel(root: &Element) -> Result<&Element, ParseError> {
    root.child(None, "channel").ok_or_else(|| {
        ParseError::Malformed(format!("no <channel> element under <{}>", root.name))
    })
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = include_str!("testdata/sample.xml");
