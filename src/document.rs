//! Document access.
//!
//! Builders never touch a browser directly. They read page state and look up
//! anchors through the [`Document`] trait, which is implemented by:
//!
//! - [`SnapshotDocument`]: serializable in-memory page, used by the CLI, the
//!   HTTP service and tests
//! - `web::WebDocument`: the live `web_sys::Document` (wasm32 only)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A `<meta>` element selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaTag {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">`
    Property(&'static str),
}

impl MetaTag {
    /// `<meta name="description">`
    pub const DESCRIPTION: MetaTag = MetaTag::Name("description");
    /// `<meta property="og:description">`
    pub const OG_DESCRIPTION: MetaTag = MetaTag::Property("og:description");

    /// CSS selector matching this tag, e.g. `meta[name='description']`.
    pub fn selector(&self) -> String {
        match self {
            MetaTag::Name(n) => format!("meta[name='{n}']"),
            MetaTag::Property(p) => format!("meta[property='{p}']"),
        }
    }
}

/// A link element whose `href` can be written.
pub trait Anchor {
    /// Current `href` attribute, if set.
    fn href(&self) -> Option<String>;
    /// Overwrite the `href` attribute.
    fn set_href(&mut self, href: &str);
}

/// Read access to page state plus anchor lookup by element id.
pub trait Document {
    /// Handle returned by [`Document::anchor`].
    type Anchor<'a>: Anchor
    where
        Self: 'a;

    /// Current page URL (`window.location.href`).
    fn location_href(&self) -> String;

    /// Current page title (`document.title`).
    fn title(&self) -> String;

    /// `content` attribute of the first element matching `tag`.
    ///
    /// Returns `None` when no element matches or the first match has no
    /// `content` attribute. An empty string is returned as-is.
    fn meta_content(&self, tag: MetaTag) -> Option<String>;

    /// Look up the anchor with the given element id.
    fn anchor(&mut self, id: &str) -> Option<Self::Anchor<'_>>;
}

/// A single `<meta>` element in a [`SnapshotDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MetaElement {
    fn matches(&self, tag: MetaTag) -> bool {
        match tag {
            MetaTag::Name(n) => self.name.as_deref() == Some(n),
            MetaTag::Property(p) => self.property.as_deref() == Some(p),
        }
    }
}

/// An anchor in a [`SnapshotDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Anchor for &mut AnchorElement {
    fn href(&self) -> Option<String> {
        self.href.clone()
    }

    fn set_href(&mut self, href: &str) {
        self.href = Some(href.to_string());
    }
}

/// In-memory page: URL, title, `<meta>` elements and anchors keyed by id.
///
/// Deserializes from the JSON accepted by `sharelinks apply` and
/// `POST /api/share/apply`:
///
/// ```json
/// {
///   "url": "https://example.com/post",
///   "title": "Hello World",
///   "meta": [{ "name": "description", "content": "A great post" }],
///   "anchors": { "mail-share-btt": {} }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta: Vec<MetaElement>,
    #[serde(default)]
    pub anchors: BTreeMap<String, AnchorElement>,
}

impl SnapshotDocument {
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append `<meta name="description" content="...">`.
    #[must_use]
    pub fn with_description(mut self, content: impl Into<String>) -> Self {
        self.meta.push(MetaElement {
            name: Some("description".into()),
            property: None,
            content: Some(content.into()),
        });
        self
    }

    /// Append `<meta property="og:description" content="...">`.
    #[must_use]
    pub fn with_og_description(mut self, content: impl Into<String>) -> Self {
        self.meta.push(MetaElement {
            name: None,
            property: Some("og:description".into()),
            content: Some(content.into()),
        });
        self
    }

    /// Add an anchor with no `href`.
    #[must_use]
    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.insert(id.into(), AnchorElement::default());
        self
    }

    /// `href` of the anchor `id`, if the anchor exists and has one.
    pub fn href_of(&self, id: &str) -> Option<&str> {
        self.anchors.get(id).and_then(|a| a.href.as_deref())
    }
}

impl Document for SnapshotDocument {
    type Anchor<'a> = &'a mut AnchorElement;

    fn location_href(&self) -> String {
        self.url.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn meta_content(&self, tag: MetaTag) -> Option<String> {
        self.meta
            .iter()
            .find(|m| m.matches(tag))
            .and_then(|m| m.content.clone())
    }

    fn anchor(&mut self, id: &str) -> Option<Self::Anchor<'_>> {
        self.anchors.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_selector() {
        assert_eq!(MetaTag::DESCRIPTION.selector(), "meta[name='description']");
        assert_eq!(
            MetaTag::OG_DESCRIPTION.selector(),
            "meta[property='og:description']"
        );
    }

    #[test]
    fn test_meta_content_first_match_wins() {
        let doc = SnapshotDocument::new("https://a.b", "T")
            .with_description("")
            .with_description("second");
        // querySelector semantics: only the first matching element counts
        assert_eq!(doc.meta_content(MetaTag::DESCRIPTION).as_deref(), Some(""));
    }

    #[test]
    fn test_meta_name_does_not_match_property() {
        let doc = SnapshotDocument::new("https://a.b", "T").with_og_description("og");
        assert!(doc.meta_content(MetaTag::DESCRIPTION).is_none());
        assert_eq!(
            doc.meta_content(MetaTag::OG_DESCRIPTION).as_deref(),
            Some("og")
        );
    }

    #[test]
    fn test_anchor_lookup_and_write() {
        let mut doc = SnapshotDocument::new("https://a.b", "T").with_anchor("x");
        assert!(doc.anchor("missing").is_none());
        let mut a = doc.anchor("x").unwrap();
        assert!(a.href().is_none());
        a.set_href("https://example.com");
        assert_eq!(doc.href_of("x"), Some("https://example.com"));
    }

    #[test]
    fn test_deserialize_snapshot() {
        let json = r##"{
            "url": "https://example.com/post",
            "title": "Hello World",
            "meta": [
                {"name": "description", "content": "A great post"},
                {"property": "og:description"}
            ],
            "anchors": {"mail-share-btt": {}, "telegram-share-btt": {"href": "#"}}
        }"##;
        let doc: SnapshotDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title, "Hello World");
        assert_eq!(doc.meta.len(), 2);
        assert!(doc.meta_content(MetaTag::OG_DESCRIPTION).is_none());
        assert_eq!(doc.href_of("telegram-share-btt"), Some("#"));
        assert_eq!(doc.href_of("mail-share-btt"), None);
    }

    #[test]
    fn test_deserialize_minimal_snapshot() {
        let doc: SnapshotDocument = serde_json::from_str(r#"{"url": "https://a.b"}"#).unwrap();
        assert_eq!(doc.title, "");
        assert!(doc.meta.is_empty());
        assert!(doc.anchors.is_empty());
    }
}
