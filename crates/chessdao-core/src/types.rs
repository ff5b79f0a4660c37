// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the deeplink relay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::callback::CallbackKind;

/// Identifier attached to every activation request for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An OS-delivered launch or resume event.
///
/// The locator is kept raw; the relay parses it when handling the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRequest {
    pub id: RequestId,
    pub received_at: DateTime<Utc>,
    /// The intent data URI, if any (e.g. `chessdao://callback?nonce=...`).
    pub locator: Option<String>,
}

impl ActivationRequest {
    pub fn new(locator: Option<String>) -> Self {
        Self {
            id: RequestId::new(),
            received_at: Utc::now(),
            locator,
        }
    }

    /// A request carrying the given URI.
    pub fn with_locator(uri: impl Into<String>) -> Self {
        Self::new(Some(uri.into()))
    }

    /// A request with no data URI (plain launcher tap).
    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }
}

/// Why the relay left the web document alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The request carried no URI.
    NoLocator,
    /// The URI could not be parsed.
    MalformedLocator,
    /// The URI belongs to another scheme.
    SchemeMismatch { scheme: String },
    /// The shell has no web view to drive.
    NoDocumentHost,
    /// Resume with a matching URI but nothing after `?`.
    EmptyQuery,
    /// The web view reported no loaded address.
    NoCurrentAddress,
    /// The web view's address could not be parsed.
    MalformedCurrentAddress,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLocator => f.write_str("no locator"),
            Self::MalformedLocator => f.write_str("malformed locator"),
            Self::SchemeMismatch { scheme } => write!(f, "scheme {scheme:?} not handled"),
            Self::NoDocumentHost => f.write_str("no document host"),
            Self::EmptyQuery => f.write_str("empty callback query"),
            Self::NoCurrentAddress => f.write_str("no current address"),
            Self::MalformedCurrentAddress => f.write_str("malformed current address"),
        }
    }
}

/// Result of handling one activation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RelayOutcome {
    /// The web document was sent to `target`.
    Navigated {
        target: String,
        callback: CallbackKind,
    },
    /// Nothing was loaded.
    Skipped(SkipReason),
}

impl RelayOutcome {
    /// The navigation target, if one was issued.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Navigated { target, .. } => Some(target),
            Self::Skipped(_) => None,
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigated { .. })
    }
}
