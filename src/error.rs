//! Errors surfaced by share-button registration and initialization.

use serde::Serialize;

use crate::share::Platform;

/// A builder whose anchor was not found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTarget {
    pub platform: Platform,
    pub target: String,
}

/// Errors returned by [`crate::init::initialize`] and
/// [`crate::init::ReadyHooks::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The document has no anchor with the builder's target id. Optional
    /// share buttons are a normal page configuration, so callers log this
    /// and move on.
    MissingTarget(MissingTarget),
    /// A builder for this platform is already registered.
    AlreadyRegistered(Platform),
    /// Another builder already owns this anchor id.
    TargetInUse { target: String, owner: Platform },
}

impl std::fmt::Display for ShareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShareError::MissingTarget(MissingTarget { platform, target }) => {
                write!(f, "No anchor '#{target}' for {platform} share link")
            }
            ShareError::AlreadyRegistered(platform) => {
                write!(f, "A {platform} share button is already registered")
            }
            ShareError::TargetInUse { target, owner } => {
                write!(f, "Anchor '#{target}' is already owned by the {owner} share button")
            }
        }
    }
}

impl std::error::Error for ShareError {}
