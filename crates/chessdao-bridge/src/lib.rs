// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ChessDAO shell: native platform bridge.
//
// On Android the hosting `MainActivity` calls into this crate from its
// lifecycle callbacks (see `android`), and the Capacitor `WebView` becomes the
// relay's document host. Elsewhere a stub bridge and an in-memory web view
// stand in so the relay can be driven from desktop and CI.

pub mod memory;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use memory::MemoryWebView;

/// Returns the bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidBridge::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Box::new(stub::StubBridge)
    }
}
