//! Browser binding (wasm32 only).
//!
//! [`WebDocument`] implements [`Document`] over the live `web_sys` document.
//! [`install_share_buttons`] registers one `DOMContentLoaded` listener per
//! platform, so a page only needs to load the module and call it once.
//! Missing anchors are reported on the developer console and skipped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Window};

use crate::document::{Anchor, Document, MetaTag};
use crate::init::ShareButton;
use crate::page::PageContext;
use crate::share::Platform;

/// The page the module is running in.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// `None` outside a window context (e.g. inside a worker).
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

/// An element looked up by id.
pub struct WebAnchor(Element);

impl Anchor for WebAnchor {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn set_href(&mut self, href: &str) {
        if let Err(e) = self.0.set_attribute("href", href) {
            console::warn_1(&e);
        }
    }
}

impl Document for WebDocument {
    type Anchor<'a> = WebAnchor;

    fn location_href(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn meta_content(&self, tag: MetaTag) -> Option<String> {
        self.document
            .query_selector(&tag.selector())
            .ok()
            .flatten()?
            .get_attribute("content")
    }

    fn anchor(&mut self, id: &str) -> Option<Self::Anchor<'_>> {
        self.document.get_element_by_id(id).map(WebAnchor)
    }
}

fn run(mut button: ShareButton) {
    let Some(mut doc) = WebDocument::current() else {
        return;
    };
    if let Some(Err(e)) = button.on_ready(&mut doc) {
        console::warn_1(&JsValue::from_str(&e.to_string()));
    }
}

fn install(button: ShareButton) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    // Module loaded after parsing finished: DOMContentLoaded already fired.
    if document.ready_state() != "loading" {
        run(button);
        return;
    }
    let callback = Closure::once(move || run(button));
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
    {
        console::warn_1(&e);
    }
    callback.forget();
}

/// Register the email, Telegram and WhatsApp buttons on their default anchors.
#[wasm_bindgen]
pub fn install_share_buttons() {
    for platform in Platform::ALL {
        install(ShareButton::new(platform));
    }
}

/// Register one platform's button on a custom anchor id.
#[wasm_bindgen]
pub fn install_share_button(platform: &str, target: &str) -> Result<(), JsValue> {
    let platform: Platform = platform.parse().map_err(|e: String| JsValue::from_str(&e))?;
    install(ShareButton::with_target(platform, target));
    Ok(())
}

/// Build one platform's share URL without touching the document.
///
/// `description` and `og_description` stand in for the two `<meta>` tags and
/// resolve the same way the page does: a non-empty `description` wins.
#[wasm_bindgen]
pub fn share_link(
    platform: &str,
    url: &str,
    title: &str,
    description: Option<String>,
    og_description: Option<String>,
) -> Result<String, JsValue> {
    let platform: Platform = platform.parse().map_err(|e: String| JsValue::from_str(&e))?;
    Ok(platform.build(&PageContext::from_parts(url, title, description, og_description)))
}
