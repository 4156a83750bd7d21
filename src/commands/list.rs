//! List export content

use anyhow::Result;
use indexmap::IndexMap;
use std::path::Path;

use crate::content::{Posts, CATEGORY_DOMAIN, TAG_DOMAIN};
use crate::helpers::format_day;
use crate::Wxr2Md;

/// List export content by type
pub fn run(app: &Wxr2Md, input: &Path, content_type: &str) -> Result<()> {
    let posts = app.load(input)?;
    for line in render(&posts, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Build the listing lines for a content type
pub fn render(posts: &Posts, content_type: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" => {
            lines.push(format!("Posts ({}):", posts.len()));
            for post in posts {
                lines.push(format!(
                    "  {} - {} [{}] ({}, {})",
                    format_day(&post.date),
                    post.title,
                    post.name,
                    post.post_type,
                    post.status
                ));
            }
        }
        "category" | "categories" => {
            let declared = posts
                .categories
                .iter()
                .map(|c| (c.nicename.as_str(), c.name.as_str()));
            let counts = count_terms(posts, CATEGORY_DOMAIN, declared);
            lines.push(format!("Categories ({}):", counts.len()));
            push_counts(&mut lines, counts);
        }
        "tag" | "tags" => {
            let declared = posts
                .tags
                .iter()
                .map(|t| (t.slug.as_str(), t.name.as_str()));
            let counts = count_terms(posts, TAG_DOMAIN, declared);
            lines.push(format!("Tags ({}):", counts.len()));
            push_counts(&mut lines, counts);
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, tag",
                content_type
            );
        }
    }

    Ok(lines)
}

/// Count term usage per nicename, declared terms first, in document order
fn count_terms<'a>(
    posts: &'a Posts,
    domain: &str,
    declared: impl Iterator<Item = (&'a str, &'a str)>,
) -> IndexMap<&'a str, (&'a str, usize)> {
    let mut counts: IndexMap<&str, (&str, usize)> =
        declared.map(|(key, name)| (key, (name, 0))).collect();

    for post in posts {
        for term in post.categories.iter().filter(|t| t.domain == domain) {
            counts
                .entry(term.nicename.as_str())
                .or_insert((term.name.as_str(), 0))
                .1 += 1;
        }
    }

    counts
}

fn push_counts(lines: &mut Vec<String>, counts: IndexMap<&str, (&str, usize)>) {
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1 .1.cmp(&a.1 .1));
    for (key, (name, count)) in counts {
        lines.push(format!("  {} [{}] ({})", name, key, count));
    }
}
