//! Telegram share link.

use crate::encode::encode_component;
use crate::page::PageContext;

/// Anchor id written by the Telegram builder.
pub const DEFAULT_TARGET: &str = "telegram-share-btt";

pub const SHARE_URL: &str = "https://t.me/share/url";

/// Build `https://t.me/share/url?url=<url>&text=<title>`.
///
/// URL and title are encoded separately. Description metadata is ignored.
pub fn telegram_link(page: &PageContext) -> String {
    format!(
        "{SHARE_URL}?url={}&text={}",
        encode_component(&page.url),
        encode_component(&page.title)
    )
}
