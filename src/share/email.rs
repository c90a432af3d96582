//! `mailto:` share link.

use crate::encode::encode_component;
use crate::page::PageContext;

/// Anchor id written by the email builder.
pub const DEFAULT_TARGET: &str = "mail-share-btt";

/// Build `mailto:?subject=<title>&body=<description url>`.
///
/// The body is the resolved description and the URL joined by one space, or
/// just the URL when the page has no description. It is encoded as a whole.
pub fn mailto_link(page: &PageContext) -> String {
    let body = match page.description() {
        Some(desc) => format!("{desc} {}", page.url),
        None => page.url.clone(),
    };
    format!(
        "mailto:?subject={}&body={}",
        encode_component(&page.title),
        encode_component(&body)
    )
}
