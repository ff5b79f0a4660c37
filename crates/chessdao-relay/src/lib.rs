// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ChessDAO shell: deeplink relay.
//
// Forwards the query of a `chessdao://` activation URI into the embedded web
// document, either as the initial load target or as a reload of the page that
// is already showing.

pub mod host;
pub mod locator;
pub mod relay;

pub use host::DocumentHost;
pub use relay::DeeplinkRelay;
