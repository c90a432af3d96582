//! WhatsApp share link.

use crate::encode::encode_component;
use crate::page::PageContext;

/// Anchor id written by the WhatsApp builder.
pub const DEFAULT_TARGET: &str = "whatsapp-share-btt";

pub const SEND_URL: &str = "https://api.whatsapp.com/send";

/// Build `https://api.whatsapp.com/send?text=<title url>`.
///
/// Unlike Telegram, title and URL are joined with a space first and encoded
/// as one parameter.
pub fn whatsapp_link(page: &PageContext) -> String {
    let text = format!("{} {}", page.title, page.url);
    format!("{SEND_URL}?text={}", encode_component(&text))
}
