// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where no Android activity exists.
//
// A cold deeplink launch is simulated through the `CHESSDAO_LAUNCH_URI`
// environment variable.

use chessdao_core::error::Result;

use crate::traits::*;

/// Environment variable read by [`StubBridge::launch_uri`].
pub const LAUNCH_URI_ENV: &str = "CHESSDAO_LAUNCH_URI";

/// Bridge returned on non-Android platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeIntent for StubBridge {
    fn launch_uri(&self) -> Result<Option<String>> {
        let uri = std::env::var(LAUNCH_URI_ENV)
            .ok()
            .filter(|uri| !uri.trim().is_empty());
        if uri.is_some() {
            tracing::debug!(env = LAUNCH_URI_ENV, "simulated launch URI from environment");
        }
        Ok(uri)
    }
}
