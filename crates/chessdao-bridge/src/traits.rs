// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// The web view itself is reached through `chessdao_relay::DocumentHost`; the
// traits here cover what the shell asks of the operating system.

use chessdao_core::error::Result;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeIntent {
    /// Human-readable platform name (e.g. "Android", "Desktop (stub)").
    fn platform_name(&self) -> &str;
}

/// Access to the intent (or equivalent) that started the application.
pub trait NativeIntent {
    /// Data URI of the launching intent, e.g. `chessdao://callback?...`.
    /// Returns None for a plain launcher start.
    fn launch_uri(&self) -> Result<Option<String>>;
}
