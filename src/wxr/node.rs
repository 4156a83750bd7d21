//! Minimal element tree built from `quick-xml` events

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ParseError;

/// An XML element with its attributes, own text and child elements
///
/// Names are kept qualified (`wp:post_id`), so lookups bind by the prefix the
/// document declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let name = utf8(start.name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| {
                ParseError::Malformed(format!("bad attribute on <{}>: {}", name, e))
            })?;
            let key = utf8(attr.key.as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| ParseError::Malformed(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Check the element name against an optional prefix and a local name
    pub fn is(&self, prefix: Option<&str>, local: &str) -> bool {
        match (self.name.split_once(':'), prefix) {
            (Some((p, l)), Some(prefix)) => p == prefix && l == local,
            (None, None) => self.name == local,
            _ => false,
        }
    }

    /// First child matching the name
    pub fn child(&self, prefix: Option<&str>, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(prefix, local))
    }

    /// All children matching the name, in document order
    pub fn children_named<'a>(
        &'a self,
        prefix: Option<&'a str>,
        local: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(prefix, local))
    }

    /// Text of the first matching child, or `default` when there is none
    pub fn child_text<'a>(&'a self, prefix: Option<&str>, local: &str, default: &'a str) -> &'a str {
        self.child(prefix, local)
            .map(|c| c.text.as_str())
            .unwrap_or(default)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a document and return its root element
pub fn parse_document(xml: &str) -> Result<Element, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ParseError::Malformed(format!(
                "{} (at byte {})",
                e,
                reader.error_position()
            ))
        })?;

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(ParseError::Malformed(
                        "content after the root element".to_string(),
                    ));
                }
                stack.push(Element::open(&start)?);
            }
            Event::Empty(start) => {
                let element = Element::open(&start)?;
                close(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml has already checked that the end name matches
                let element = stack.pop().ok_or_else(|| {
                    ParseError::Malformed("unexpected closing tag".to_string())
                })?;
                close(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| ParseError::Malformed(e.to_string()))?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(ParseError::Malformed(
                            "text outside the root element".to_string(),
                        ))
                    }
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                let current = stack.last_mut().ok_or_else(|| {
                    ParseError::Malformed("CDATA outside the root element".to_string())
                })?;
                current.text.push_str(utf8(&data)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::Malformed(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| ParseError::Malformed("no root element".to_string()))
}

fn close(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(ParseError::Malformed(
                "more than one root element".to_string(),
            ))
        }
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::Malformed(format!("invalid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_tree_with_prefixed_names() {
        let xml = r#"<?xml version="1.0"?>
<rss xmlns:wp="http://wordpress.org/export/1.2/">
  <channel>
    <wp:post_id>7</wp:post_id>
    <title>A &amp; B</title>
  </channel>
</rss>"#;
        let root = parse_document(xml).unwrap();
        assert_eq!(root.name, "rss");
        let channel = root.child(None, "channel").unwrap();
        assert_eq!(channel.child_text(Some("wp"), "post_id", ""), "7");
        assert_eq!(channel.child_text(None, "title", ""), "A & B");
        assert_eq!(channel.child_text(None, "missing", ""), "");
    }

    #[test]
    fn test_prefix_must_match() {
        let root = parse_document("<a><wp:title>x</wp:title></a>").unwrap();
        assert!(root.child(None, "title").is_none());
        assert!(root.child(Some("dc"), "title").is_none());
        assert!(root.child(Some("wp"), "title").is_some());
    }

    #[test]
    fn test_cdata_is_kept_verbatim() {
        let root = parse_document("<a><b><![CDATA[<p>Hi &amp; bye</p>]]></b></a>").unwrap();
        assert_eq!(root.child_text(None, "b", ""), "<p>Hi &amp; bye</p>");
    }

    #[test]
    fn test_attributes_and_empty_elements() {
        let root =
            parse_document(r#"<a><c domain="post_tag" nicename="x&amp;y"/></a>"#).unwrap();
        let c = root.child(None, "c").unwrap();
        assert_eq!(c.attribute("domain"), Some("post_tag"));
        assert_eq!(c.attribute("nicename"), Some("x&y"));
        assert_eq!(c.attribute("missing"), None);
        assert_eq!(c.text, "");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            parse_document("<a><b></a>"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_document("<a><b>"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_document("just text"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_document("<a/><b/>"),
            Err(ParseError::Malformed(_))
        ));
    }
}
