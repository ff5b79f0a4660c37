// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer: wires configuration, the platform bridge and the relay
// together for the harness commands.

pub mod data_dir;
pub mod shell_services;
