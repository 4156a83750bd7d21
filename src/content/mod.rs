//! Content module - the blog, its posts and their front-matter

mod frontmatter;
mod post;
mod posts;

pub use frontmatter::{FrontMatter, DEFAULT_UNTITLED};
pub use post::{Post, TermAssignment, CATEGORY_DOMAIN, TAG_DOMAIN};
pub use posts::{CategoryTerm, Posts, TagTerm};
