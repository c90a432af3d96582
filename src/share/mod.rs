//! Share-link builders.
//!
//! Each platform is a pure function from [`PageContext`] to a URL string:
//!
//! | Platform   | Default target        | Link                                         |
//! |------------|-----------------------|----------------------------------------------|
//! | `email`    | `mail-share-btt`      | `mailto:?subject=<enc>&body=<enc>`           |
//! | `telegram` | `telegram-share-btt`  | `https://t.me/share/url?url=<enc>&text=<enc>`|
//! | `whatsapp` | `whatsapp-share-btt`  | `https://api.whatsapp.com/send?text=<enc>`   |

pub mod email;
pub mod telegram;
pub mod whatsapp;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::page::PageContext;

pub use email::mailto_link;
pub use telegram::telegram_link;
pub use whatsapp::whatsapp_link;

/// A share destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "mail")]
    Email,
    Telegram,
    WhatsApp,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Email, Platform::Telegram, Platform::WhatsApp];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Telegram => "telegram",
            Self::WhatsApp => "whatsapp",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "email" | "mail" => Some(Self::Email),
            "telegram" => Some(Self::Telegram),
            "whatsapp" => Some(Self::WhatsApp),
            _ => None,
        }
    }

    /// Anchor id this platform writes to unless configured otherwise.
    #[must_use]
    pub fn default_target(&self) -> &'static str {
        match self {
            Self::Email => email::DEFAULT_TARGET,
            Self::Telegram => telegram::DEFAULT_TARGET,
            Self::WhatsApp => whatsapp::DEFAULT_TARGET,
        }
    }

    /// Build this platform's share URL for `page`.
    pub fn build(&self, page: &PageContext) -> String {
        match self {
            Self::Email => mailto_link(page),
            Self::Telegram => telegram_link(page),
            Self::WhatsApp => whatsapp_link(page),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_opt(s).ok_or_else(|| {
            format!("Unknown platform '{s}' (expected email, telegram or whatsapp)")
        })
    }
}

/// A built link and the anchor it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub platform: Platform,
    pub target: String,
    pub href: String,
}

/// Links for one page keyed by platform. Serializes as a JSON object
/// (`{"email": ..., "telegram": ..., "whatsapp": ...}`) in platform order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShareLinks(BTreeMap<Platform, String>);

impl ShareLinks {
    /// Build a link for each of `platforms`. Duplicates collapse.
    pub fn build(page: &PageContext, platforms: &[Platform]) -> Self {
        Self(platforms.iter().map(|p| (*p, p.build(page))).collect())
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.0.iter().map(|(p, href)| (*p, href.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip_names() {
        for p in Platform::ALL {
            assert_eq!(Platform::from_str_opt(p.as_str()), Some(p));
        }
        assert_eq!(Platform::from_str_opt("mail"), Some(Platform::Email));
        assert!("sms".parse::<Platform>().is_err());
    }

    #[test]
    fn test_default_targets_are_distinct() {
        assert_eq!(Platform::Email.default_target(), "mail-share-btt");
        assert_eq!(Platform::Telegram.default_target(), "telegram-share-btt");
        assert_eq!(Platform::WhatsApp.default_target(), "whatsapp-share-btt");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Platform::WhatsApp).unwrap(),
            "\"whatsapp\""
        );
        let p: Platform = serde_json::from_str("\"telegram\"").unwrap();
        assert_eq!(p, Platform::Telegram);
    }

    #[test]
    fn test_share_links_match_builders() {
        let page = PageContext::new("https://example.com/post", "Hello World")
            .with_description("A great post");
        let links = ShareLinks::build(&page, &Platform::ALL);
        assert_eq!(links.len(), 3);
        for p in Platform::ALL {
            assert_eq!(links.get(p), Some(p.build(&page).as_str()));
        }
    }

    #[test]
    fn test_share_links_subset_in_platform_order() {
        let page = PageContext::new("https://a.b", "T");
        let links = ShareLinks::build(&page, &[Platform::WhatsApp, Platform::Email]);
        let order: Vec<Platform> = links.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Platform::Email, Platform::WhatsApp]);
        assert_eq!(links.get(Platform::Telegram), None);
    }

    #[test]
    fn test_share_links_serialize_as_map() {
        let page = PageContext::new("https://a.b", "T");
        let links = ShareLinks::build(&page, &[Platform::Telegram]);
        assert_eq!(
            serde_json::to_value(&links).unwrap(),
            serde_json::json!({ "telegram": "https://t.me/share/url?url=https%3A%2F%2Fa.b&text=T" })
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let page = PageContext::new("https://example.com/post", "Hello World");
        for p in Platform::ALL {
            assert_eq!(p.build(&page), p.build(&page));
        }
    }
}
