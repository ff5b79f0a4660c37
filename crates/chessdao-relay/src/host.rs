// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The embedded document host seen from the relay.

use chessdao_core::error::Result;

/// The in-process web surface the relay drives (an Android `WebView` on
/// device, an in-memory stand-in on desktop).
///
/// Errors are bridge failures only; "nothing loaded yet" is `Ok(None)`.
pub trait DocumentHost {
    /// Navigate the document to `url`. Observable as a full reload.
    fn load_url(&self, url: &str) -> Result<()>;

    /// Address of the currently loaded document, if any.
    fn current_url(&self) -> Result<Option<String>>;
}
