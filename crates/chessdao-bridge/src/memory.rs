// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory web view used off-device.

use std::sync::{Mutex, MutexGuard};

use chessdao_core::error::{Result, ShellError};
use chessdao_relay::DocumentHost;

#[derive(Debug, Default)]
struct WebViewState {
    current: Option<String>,
    history: Vec<String>,
}

/// A document host that only remembers what it was told to load.
///
/// `load_url` makes the URL current and appends it to the history, which is
/// what an Android `WebView` looks like to the relay once the page finishes
/// loading.
#[derive(Debug, Default)]
pub struct MemoryWebView {
    state: Mutex<WebViewState>,
}

impl MemoryWebView {
    /// A web view with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A web view already showing `url` (not recorded in the history).
    pub fn showing(url: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(WebViewState {
                current: Some(url.into()),
                history: Vec::new(),
            }),
        }
    }

    /// Every URL loaded so far, oldest first.
    pub fn history(&self) -> Result<Vec<String>> {
        Ok(self.state()?.history.clone())
    }

    fn state(&self) -> Result<MutexGuard<'_, WebViewState>> {
        self.state
            .lock()
            .map_err(|_| ShellError::Bridge("web view state poisoned".into()))
    }
}

impl DocumentHost for MemoryWebView {
    fn load_url(&self, url: &str) -> Result<()> {
        let mut state = self.state()?;
        state.current = Some(url.to_owned());
        state.history.push(url.to_owned());
        tracing::debug!(url, "memory web view loaded URL");
        Ok(())
    }

    fn current_url(&self) -> Result<Option<String>> {
        Ok(self.state()?.current.clone())
    }
}
