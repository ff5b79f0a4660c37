// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Classification of wallet callback queries.
//
// The shell never decrypts anything; it only looks at which parameters the
// wallet returned so the outcome can be logged and reported.

use serde::{Deserialize, Serialize};

/// Wallet's ephemeral public key in a connect response.
pub const PARAM_ENCRYPTION_PUBLIC_KEY: &str = "phantom_encryption_public_key";
pub const PARAM_NONCE: &str = "nonce";
/// Encrypted response payload.
pub const PARAM_DATA: &str = "data";
pub const PARAM_ERROR_CODE: &str = "errorCode";
pub const PARAM_ERROR_MESSAGE: &str = "errorMessage";

/// What kind of callback a query string carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallbackKind {
    /// An encrypted connect response (key, nonce and payload all present).
    WalletConnected,
    /// The wallet rejected or failed the request.
    WalletError {
        code: String,
        message: Option<String>,
    },
    /// Anything else, including an empty query.
    Other,
}

impl CallbackKind {
    /// Classify a raw (still percent-encoded) query string.
    ///
    /// Empty parameter values count as absent. An error code takes precedence
    /// over connect fields.
    pub fn classify(query: &str) -> Self {
        let mut has_key = false;
        let mut has_nonce = false;
        let mut has_data = false;
        let mut code = None;
        let mut message = None;

        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match name.as_ref() {
                PARAM_ENCRYPTION_PUBLIC_KEY => has_key = true,
                PARAM_NONCE => has_nonce = true,
                PARAM_DATA => has_data = true,
                PARAM_ERROR_CODE => code = Some(value.into_owned()),
                PARAM_ERROR_MESSAGE => message = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(code) = code {
            Self::WalletError { code, message }
        } else if has_key && has_nonce && has_data {
            Self::WalletConnected
        } else {
            Self::Other
        }
    }
}
