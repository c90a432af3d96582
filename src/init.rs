//! Share-button initialization.
//!
//! A page registers one [`ShareButton`] per platform in [`ReadyHooks`] and
//! fires the hooks once its document structure is available. Each button
//! then runs exactly once:
//!
//! ```text
//! Unloaded ──ready──▶ Loaded ──anchor found──▶ LinkAssigned
//!                        │
//!                        └──anchor missing──▶ (stays Loaded, warn logged)
//! ```
//!
//! Buttons share no state. A missing anchor for one platform is logged and
//! reported but never stops the others.

use serde::Serialize;
use tracing::{debug, warn};

use crate::document::{Anchor, Document};
use crate::error::{MissingTarget, ShareError};
use crate::page::PageContext;
use crate::share::{Platform, ShareLink};

/// Build `platform`'s link for `page` and write it to anchor `target`.
///
/// Pure apart from the single `href` write, so calling it again with the
/// same page state produces the same `href`.
pub fn initialize<D: Document + ?Sized>(
    platform: Platform,
    page: &PageContext,
    doc: &mut D,
    target: &str,
) -> Result<ShareLink, ShareError> {
    let href = platform.build(page);
    let Some(mut anchor) = doc.anchor(target) else {
        return Err(ShareError::MissingTarget(MissingTarget {
            platform,
            target: target.to_string(),
        }));
    };
    anchor.set_href(&href);
    debug!(platform = %platform, target, "share link assigned");
    Ok(ShareLink {
        platform,
        target: target.to_string(),
        href,
    })
}

/// Lifecycle of a single [`ShareButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    /// Registered, document not ready yet.
    Unloaded,
    /// Ran on document ready; link built but not assigned (anchor missing).
    Loaded,
    /// Link written to the anchor.
    LinkAssigned,
}

/// One platform's builder bound to its anchor id.
#[derive(Debug, Clone)]
pub struct ShareButton {
    platform: Platform,
    target: String,
    state: ButtonState,
    href: Option<String>,
}

impl ShareButton {
    /// Button writing to the platform's default anchor id.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self::with_target(platform, platform.default_target())
    }

    #[must_use]
    pub fn with_target(platform: Platform, target: impl Into<String>) -> Self {
        Self {
            platform,
            target: target.into(),
            state: ButtonState::Unloaded,
            href: None,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Link assigned by the last run, if any.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Run on document ready. Reads a fresh [`PageContext`] from `doc`.
    ///
    /// Returns `None` if the button already ran: later DOM changes do not
    /// re-trigger it.
    pub fn on_ready<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
    ) -> Option<Result<ShareLink, ShareError>> {
        if self.state != ButtonState::Unloaded {
            return None;
        }
        let page = PageContext::read(&*doc);
        self.state = ButtonState::Loaded;
        let result = initialize(self.platform, &page, doc, &self.target);
        if let Ok(link) = &result {
            self.state = ButtonState::LinkAssigned;
            self.href = Some(link.href.clone());
        }
        Some(result)
    }
}

/// Outcome of firing [`ReadyHooks`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub assigned: Vec<ShareLink>,
    pub missing: Vec<MissingTarget>,
}

impl InitReport {
    /// `href` assigned for `platform`, if its anchor was found.
    pub fn href(&self, platform: Platform) -> Option<&str> {
        self.assigned
            .iter()
            .find(|l| l.platform == platform)
            .map(|l| l.href.as_str())
    }
}

/// Registry of share buttons fired once when the document is ready.
#[derive(Debug, Clone, Default)]
pub struct ReadyHooks {
    buttons: Vec<ShareButton>,
    fired: bool,
}

impl ReadyHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All three platforms on their default anchor ids.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            buttons: Platform::ALL.into_iter().map(ShareButton::new).collect(),
            fired: false,
        }
    }

    /// Register `platform` to write anchor `target`.
    ///
    /// Each platform registers at most once and each anchor id has at most
    /// one owner.
    pub fn register(
        &mut self,
        platform: Platform,
        target: impl Into<String>,
    ) -> Result<(), ShareError> {
        let target = target.into();
        for b in &self.buttons {
            if b.platform == platform {
                return Err(ShareError::AlreadyRegistered(platform));
            }
            if b.target == target {
                return Err(ShareError::TargetInUse {
                    target,
                    owner: b.platform,
                });
            }
        }
        self.buttons.push(ShareButton::with_target(platform, target));
        Ok(())
    }

    pub fn buttons(&self) -> &[ShareButton] {
        &self.buttons
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Run every registered button against `doc`.
    ///
    /// Only the first call does anything; later calls return an empty report.
    pub fn fire<D: Document + ?Sized>(&mut self, doc: &mut D) -> InitReport {
        let mut report = InitReport::default();
        if self.fired {
            debug!("ready hooks already fired, ignoring");
            return report;
        }
        self.fired = true;

        for button in &mut self.buttons {
            match button.on_ready(&mut *doc) {
                Some(Ok(link)) => report.assigned.push(link),
                Some(Err(ShareError::MissingTarget(missing))) => {
                    warn!(
                        platform = %missing.platform,
                        target = %missing.target,
                        "share anchor not found, skipping"
                    );
                    report.missing.push(missing);
                }
                Some(Err(e)) => warn!(platform = %button.platform, "{e}"),
                None => {}
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SnapshotDocument;

    const URL: &str = "https://example.com/post";

    fn full_page() -> SnapshotDocument {
        SnapshotDocument::new(URL, "Hello World")
            .with_anchor("mail-share-btt")
            .with_anchor("telegram-share-btt")
            .with_anchor("whatsapp-share-btt")
    }

    #[test]
    fn test_initialize_writes_href() {
        let mut doc = full_page();
        let page = PageContext::read(&doc);
        let link = initialize(Platform::Telegram, &page, &mut doc, "telegram-share-btt").unwrap();
        assert_eq!(
            doc.href_of("telegram-share-btt"),
            Some("https://t.me/share/url?url=https%3A%2F%2Fexample.com%2Fpost&text=Hello%20World")
        );
        assert_eq!(link.href, doc.href_of("telegram-share-btt").unwrap());
        // other anchors untouched
        assert_eq!(doc.href_of("mail-share-btt"), None);
        assert_eq!(doc.href_of("whatsapp-share-btt"), None);
    }

    #[test]
    fn test_initialize_missing_target() {
        let mut doc = SnapshotDocument::new(URL, "Hello World");
        let page = PageContext::read(&doc);
        let err = initialize(Platform::Email, &page, &mut doc, "mail-share-btt").unwrap_err();
        assert_eq!(
            err,
            ShareError::MissingTarget(MissingTarget {
                platform: Platform::Email,
                target: "mail-share-btt".into()
            })
        );
    }

    #[test]
    fn test_initialize_twice_is_idempotent() {
        let mut doc = full_page().with_description("A great post");
        let page = PageContext::read(&doc);
        let first = initialize(Platform::Email, &page, &mut doc, "mail-share-btt").unwrap();
        let second = initialize(Platform::Email, &page, &mut doc, "mail-share-btt").unwrap();
        assert_eq!(first, second);
        assert_eq!(doc.href_of("mail-share-btt"), Some(first.href.as_str()));
    }

    #[test]
    fn test_button_state_transitions() {
        let mut doc = full_page();
        let mut button = ShareButton::new(Platform::WhatsApp);
        assert_eq!(button.state(), ButtonState::Unloaded);

        let link = button.on_ready(&mut doc).unwrap().unwrap();
        assert_eq!(button.state(), ButtonState::LinkAssigned);
        assert_eq!(button.href(), Some(link.href.as_str()));
        assert_eq!(
            link.href,
            "https://api.whatsapp.com/send?text=Hello%20World%20https%3A%2F%2Fexample.com%2Fpost"
        );
    }

    #[test]
    fn test_button_runs_once() {
        let mut doc = full_page();
        let mut button = ShareButton::new(Platform::Telegram);
        assert!(button.on_ready(&mut doc).is_some());

        // later title change must not re-trigger the button
        doc.title = "Changed".into();
        assert!(button.on_ready(&mut doc).is_none());
        assert!(doc
            .href_of("telegram-share-btt")
            .unwrap()
            .ends_with("text=Hello%20World"));
    }

    #[test]
    fn test_button_missing_target_stays_loaded() {
        let mut doc = SnapshotDocument::new(URL, "T");
        let mut button = ShareButton::new(Platform::Email);
        let result = button.on_ready(&mut doc).unwrap();
        assert!(result.is_err());
        assert_eq!(button.state(), ButtonState::Loaded);
        assert!(button.href().is_none());
    }

    #[test]
    fn test_fire_assigns_all_three() {
        let mut doc = full_page();
        let mut hooks = ReadyHooks::with_defaults();
        let report = hooks.fire(&mut doc);

        assert!(report.missing.is_empty());
        assert_eq!(report.assigned.len(), 3);
        assert_eq!(
            doc.href_of("mail-share-btt"),
            Some("mailto:?subject=Hello%20World&body=https%3A%2F%2Fexample.com%2Fpost")
        );
        assert_eq!(
            doc.href_of("telegram-share-btt"),
            report.href(Platform::Telegram)
        );
        assert_eq!(
            doc.href_of("whatsapp-share-btt"),
            report.href(Platform::WhatsApp)
        );
    }

    #[test]
    fn test_fire_isolates_missing_target() {
        let mut doc = SnapshotDocument::new(URL, "Hello World")
            .with_anchor("mail-share-btt")
            .with_anchor("whatsapp-share-btt");
        let mut hooks = ReadyHooks::with_defaults();
        let report = hooks.fire(&mut doc);

        assert_eq!(
            report.missing,
            vec![MissingTarget {
                platform: Platform::Telegram,
                target: "telegram-share-btt".into()
            }]
        );
        assert!(doc.href_of("mail-share-btt").is_some());
        assert!(doc.href_of("whatsapp-share-btt").is_some());
        assert!(!doc.anchors.contains_key("telegram-share-btt"));
    }

    #[test]
    fn test_fire_only_once() {
        let mut doc = full_page();
        let mut hooks = ReadyHooks::with_defaults();
        assert_eq!(hooks.fire(&mut doc).assigned.len(), 3);
        assert!(hooks.is_fired());
        assert_eq!(hooks.fire(&mut doc), InitReport::default());
    }

    #[test]
    fn test_fire_uses_description_for_email() {
        let mut doc = full_page()
            .with_og_description("og text")
            .with_description("A great post");
        let mut hooks = ReadyHooks::with_defaults();
        hooks.fire(&mut doc);
        assert_eq!(
            doc.href_of("mail-share-btt"),
            Some("mailto:?subject=Hello%20World&body=A%20great%20post%20https%3A%2F%2Fexample.com%2Fpost")
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut hooks = ReadyHooks::new();
        hooks.register(Platform::Email, "share-a").unwrap();
        assert_eq!(
            hooks.register(Platform::Email, "share-b"),
            Err(ShareError::AlreadyRegistered(Platform::Email))
        );
        assert_eq!(
            hooks.register(Platform::Telegram, "share-a"),
            Err(ShareError::TargetInUse {
                target: "share-a".into(),
                owner: Platform::Email
            })
        );
        assert_eq!(hooks.buttons().len(), 1);
    }

    #[test]
    fn test_custom_target() {
        let mut doc = SnapshotDocument::new(URL, "Hello World").with_anchor("tg");
        let mut hooks = ReadyHooks::new();
        hooks.register(Platform::Telegram, "tg").unwrap();
        let report = hooks.fire(&mut doc);
        assert_eq!(report.assigned.len(), 1);
        assert_eq!(report.assigned[0].target, "tg");
        assert!(doc.href_of("tg").is_some());
    }
}
