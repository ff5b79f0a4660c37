// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ChessDAO shell: core types and error definitions shared across all crates.

pub mod callback;
pub mod config;
pub mod error;
pub mod human_messages;
pub mod types;

pub use callback::CallbackKind;
pub use config::ShellConfig;
pub use error::ShellError;
pub use types::*;
