// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language messages for relay outcomes.
//
// A dropped wallet callback is otherwise invisible to the player, so every
// outcome maps to a short message the shell can show or log.

use serde::Serialize;

use crate::callback::CallbackKind;
use crate::types::{RelayOutcome, SkipReason};

/// How much the player needs to care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; nothing to do.
    Info,
    /// The player should retry in the wallet or the game.
    ActionRequired,
    /// Not a wallet callback at all; safe to stay silent.
    Ignored,
}

/// A plain-language message with a suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct HumanMessage {
    pub message: String,
    pub suggestion: String,
    pub severity: Severity,
}

impl HumanMessage {
    fn new(message: &str, suggestion: &str, severity: Severity) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            severity,
        }
    }
}

/// Message for a request the relay did not act on.
pub fn humanize_skip(reason: &SkipReason) -> HumanMessage {
    match reason {
        SkipReason::NoLocator | SkipReason::SchemeMismatch { .. } => HumanMessage::new(
            "Nothing to hand over to the game.",
            "No action needed.",
            Severity::Ignored,
        ),
        SkipReason::MalformedLocator => HumanMessage::new(
            "The wallet sent back a link we couldn't read.",
            "Go back to the game and connect your wallet again.",
            Severity::ActionRequired,
        ),
        SkipReason::EmptyQuery => HumanMessage::new(
            "The wallet returned without an answer.",
            "Open the wallet again and approve or reject the request.",
            Severity::ActionRequired,
        ),
        SkipReason::NoDocumentHost
        | SkipReason::NoCurrentAddress
        | SkipReason::MalformedCurrentAddress => HumanMessage::new(
            "The game wasn't ready to receive the wallet's answer.",
            "Wait for the game to finish loading, then connect your wallet again.",
            Severity::ActionRequired,
        ),
    }
}

/// Message for a callback that was delivered to the web document.
pub fn humanize_callback(kind: &CallbackKind) -> HumanMessage {
    match kind {
        CallbackKind::WalletConnected => HumanMessage::new(
            "Wallet connected.",
            "You're ready to play.",
            Severity::Info,
        ),
        CallbackKind::WalletError { code, message } => HumanMessage {
            message: "The wallet didn't complete the request.".into(),
            suggestion: match message {
                Some(m) => format!("Try again from the game. ({m}, code {code})"),
                None => format!("Try again from the game. (code {code})"),
            },
            severity: Severity::ActionRequired,
        },
        CallbackKind::Other => HumanMessage::new(
            "Returned to the game.",
            "No action needed.",
            Severity::Info,
        ),
    }
}

pub fn humanize_outcome(outcome: &RelayOutcome) -> HumanMessage {
    match outcome {
        RelayOutcome::Navigated { callback, .. } => humanize_callback(callback),
        RelayOutcome::Skipped(reason) => humanize_skip(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_scheme_is_ignored() {
        let human = humanize_skip(&SkipReason::SchemeMismatch {
            scheme: "https".into(),
        });
        assert_eq!(human.severity, Severity::Ignored);
    }

    #[test]
    fn empty_query_asks_for_retry() {
        let human = humanize_skip(&SkipReason::EmptyQuery);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn wallet_error_mentions_code() {
        let human = humanize_callback(&CallbackKind::WalletError {
            code: "4001".into(),
            message: Some("User rejected the request".into()),
        });
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("4001"));
        assert!(human.suggestion.contains("User rejected"));
    }

    #[test]
    fn navigation_uses_callback_message() {
        let outcome = RelayOutcome::Navigated {
            target: "file:///android_asset/public/index.html?x=1".into(),
            callback: CallbackKind::WalletConnected,
        };
        assert_eq!(humanize_outcome(&outcome).severity, Severity::Info);
    }
}
