//! The WXR schema as declarative field-mapping tables
//!
//! Each record type lists `(field, prefix, element, default)` rows. A single
//! generic function, [`extract`], applies any table to an element, so the
//! whole mapping between WXR and the content model lives in this file.

use super::node::Element;
use crate::content::{CategoryTerm, Post, Posts, TagTerm, TermAssignment};

/// Prefix of the WordPress export namespace
pub const WP: &str = "wp";
/// Prefix of the Dublin Core namespace
pub const DC: &str = "dc";
/// Prefix of the RSS content module namespace
pub const CONTENT: &str = "content";
/// Prefix of the WordPress excerpt namespace
pub const EXCERPT: &str = "excerpt";
/// Prefix some exports put on per-item category elements
pub const CATEGORY: &str = "category";

/// One row of a mapping table
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping<F> {
    pub field: F,
    pub prefix: Option<&'static str>,
    pub element: &'static str,
    pub default: &'static str,
}

const fn plain<F>(field: F, element: &'static str) -> FieldMapping<F> {
    FieldMapping {
        field,
        prefix: None,
        element,
        default: "",
    }
}

const fn ns<F>(field: F, prefix: &'static str, element: &'static str) -> FieldMapping<F> {
    FieldMapping {
        field,
        prefix: Some(prefix),
        element,
        default: "",
    }
}

/// A record whose string fields are filled from child elements
pub trait Mapped: Default {
    type Field: Copy + 'static;

    const FIELDS: &'static [FieldMapping<Self::Field>];

    fn slot(&mut self, field: Self::Field) -> &mut String;
}

/// Apply a record's mapping table to an element
pub fn extract<T: Mapped>(element: &Element) -> T {
    let mut record = T::default();
    for mapping in T::FIELDS {
        let value = element.child_text(mapping.prefix, mapping.element, mapping.default);
        *record.slot(mapping.field) = value.to_string();
    }
    record
}

#[derive(Debug, Clone, Copy)]
pub enum ChannelField {
    Title,
    Link,
    Description,
    PubDate,
    Language,
    BaseSiteUrl,
    BaseBlogUrl,
}

impl Mapped for Posts {
    type Field = ChannelField;

    const FIELDS: &'static [FieldMapping<ChannelField>] = &[
        plain(ChannelField::Title, "title"),
        plain(ChannelField::Link, "link"),
        plain(ChannelField::Description, "description"),
        plain(ChannelField::PubDate, "pubDate"),
        plain(ChannelField::Language, "language"),
        ns(ChannelField::BaseSiteUrl, WP, "base_site_url"),
        ns(ChannelField::BaseBlogUrl, WP, "base_blog_url"),
    ];

    fn slot(&mut self, field: ChannelField) -> &mut String {
        match field {
            ChannelField::Title => &mut self.title,
            ChannelField::Link => &mut self.link,
            ChannelField::Description => &mut self.description,
            ChannelField::PubDate => &mut self.pub_date,
            ChannelField::Language => &mut self.language,
            ChannelField::BaseSiteUrl => &mut self.base_site_url,
            ChannelField::BaseBlogUrl => &mut self.base_blog_url,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CategoryField {
    TermId,
    Nicename,
    Parent,
    Name,
}

impl Mapped for CategoryTerm {
    type Field = CategoryField;

    const FIELDS: &'static [FieldMapping<CategoryField>] = &[
        ns(CategoryField::TermId, WP, "term_id"),
        ns(CategoryField::Nicename, WP, "category_nicename"),
        ns(CategoryField::Parent, WP, "category_parent"),
        ns(CategoryField::Name, WP, "cat_name"),
    ];

    fn slot(&mut self, field: CategoryField) -> &mut String {
        match field {
            CategoryField::TermId => &mut self.term_id,
            CategoryField::Nicename => &mut self.nicename,
            CategoryField::Parent => &mut self.parent,
            CategoryField::Name => &mut self.name,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TagField {
    TermId,
    Slug,
    Name,
}

impl Mapped for TagTerm {
    type Field = TagField;

    const FIELDS: &'static [FieldMapping<TagField>] = &[
        ns(TagField::TermId, WP, "term_id"),
        ns(TagField::Slug, WP, "tag_slug"),
        ns(TagField::Name, WP, "tag_name"),
    ];

    fn slot(&mut self, field: TagField) -> &mut String {
        match field {
            TagField::TermId => &mut self.term_id,
            TagField::Slug => &mut self.slug,
            TagField::Name => &mut self.name,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PostField {
    Title,
    Link,
    PubDate,
    Guid,
    Description,
    Id,
    Date,
    DateGmt,
    Name,
    Status,
    Type,
    IsSticky,
    Password,
    Creator,
    Content,
    Excerpt,
}

impl Mapped for Post {
    type Field = PostField;

    const FIELDS: &'static [FieldMapping<PostField>] = &[
        plain(PostField::Title, "title"),
        plain(PostField::Link, "link"),
        plain(PostField::PubDate, "pubDate"),
        plain(PostField::Guid, "guid"),
        plain(PostField::Description, "description"),
        ns(PostField::Id, WP, "post_id"),
        ns(PostField::Date, WP, "post_date"),
        ns(PostField::DateGmt, WP, "post_date_gmt"),
        ns(PostField::Name, WP, "post_name"),
        ns(PostField::Status, WP, "status"),
        ns(PostField::Type, WP, "post_type"),
        ns(PostField::IsSticky, WP, "is_sticky"),
        ns(PostField::Password, WP, "post_password"),
        ns(PostField::Creator, DC, "creator"),
        ns(PostField::Content, CONTENT, "encoded"),
        ns(PostField::Excerpt, EXCERPT, "encoded"),
    ];

    fn slot(&mut self, field: PostField) -> &mut String {
        match field {
            PostField::Title => &mut self.title,
            PostField::Link => &mut self.link,
            PostField::PubDate => &mut self.pub_date,
            PostField::Guid => &mut self.guid,
            PostField::Description => &mut self.description,
            PostField::Id => &mut self.id,
            PostField::Date => &mut self.date,
            PostField::DateGmt => &mut self.date_gmt,
            PostField::Name => &mut self.name,
            PostField::Status => &mut self.status,
            PostField::Type => &mut self.post_type,
            PostField::IsSticky => &mut self.is_sticky,
            PostField::Password => &mut self.password,
            PostField::Creator => &mut self.creator,
            PostField::Content => &mut self.content,
            PostField::Excerpt => &mut self.excerpt,
        }
    }
}

/// Whether an item child is a per-post term (`category` or `category:category`)
pub fn is_term_assignment(element: &Element) -> bool {
    element.is(None, "category") || element.is(Some(CATEGORY), "category")
}

/// Read a per-post term: attributes carry nicename and domain, text is the name
pub fn term_assignment(element: &Element) -> TermAssignment {
    TermAssignment {
        nicename: element.attribute("nicename").unwrap_or_default().to_string(),
        name: element.text.clone(),
        domain: element.attribute("domain").unwrap_or_default().to_string(),
    }
}

/// Build a post from an `item` element; missing children become empty strings
pub fn post(item: &Element) -> Post {
    let mut post: Post = extract(item);
    post.categories = item
        .children
        .iter()
        .filter(|c| is_term_assignment(c))
        .map(term_assignment)
        .collect();
    post
}
