//! Page state read by the share-link builders.

use crate::document::{Document, MetaTag};

/// Read-only snapshot of the current page.
///
/// Builders read a fresh context from the [`Document`] on every invocation;
/// nothing here is cached between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub url: String,
    pub title: String,
    /// `content` of `<meta name="description">`.
    pub description_meta: Option<String>,
    /// `content` of `<meta property="og:description">`.
    pub og_description_meta: Option<String>,
}

impl PageContext {
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description_meta: None,
            og_description_meta: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_meta = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_og_description(mut self, description: impl Into<String>) -> Self {
        self.og_description_meta = Some(description.into());
        self
    }

    /// Page state supplied directly rather than read from a document. `None`
    /// means the tag is absent.
    #[must_use]
    pub fn from_parts(
        url: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        og_description: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description_meta: description,
            og_description_meta: og_description,
        }
    }

    /// Read URL, title and both description tags from `doc`.
    pub fn read<D: Document + ?Sized>(doc: &D) -> Self {
        Self {
            url: doc.location_href(),
            title: doc.title(),
            description_meta: doc.meta_content(MetaTag::DESCRIPTION),
            og_description_meta: doc.meta_content(MetaTag::OG_DESCRIPTION),
        }
    }

    /// Resolved description: `name="description"` if non-empty, else
    /// `property="og:description"` if non-empty, else `None`.
    pub fn description(&self) -> Option<&str> {
        [&self.description_meta, &self.og_description_meta]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .find(|d| !d.is_empty())
    }
}
