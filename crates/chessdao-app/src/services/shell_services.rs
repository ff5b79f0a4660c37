// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shell services: owns the relay, the (in-memory) web view and the platform
// bridge for one harness run, and turns each relay outcome into a report.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chessdao_bridge::MemoryWebView;
use chessdao_bridge::traits::PlatformBridge;
use chessdao_core::error::Result;
use chessdao_core::human_messages::{HumanMessage, humanize_outcome};
use chessdao_core::{ActivationRequest, RelayOutcome, RequestId, ShellConfig};
use chessdao_relay::DeeplinkRelay;
use serde::Serialize;
use tracing::{info, warn};

use super::data_dir;

/// Which lifecycle callback a request arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Launch,
    Resume,
}

/// One line of harness output.
#[derive(Debug, Serialize)]
pub struct Report {
    pub request: RequestId,
    pub phase: Phase,
    pub outcome: RelayOutcome,
    pub message: HumanMessage,
}

pub struct ShellServices {
    config_path: PathBuf,
    relay: DeeplinkRelay,
    webview: MemoryWebView,
    bridge: Box<dyn PlatformBridge>,
}

impl ShellServices {
    /// Load the config (defaults if the file does not exist), build the relay
    /// and a web view already showing `current` or the entry document.
    pub fn init(config_path: Option<PathBuf>, current: Option<String>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(data_dir::default_config_path);
        let relay = DeeplinkRelay::new(load_config(&config_path)?)?;
        let webview = MemoryWebView::showing(
            current.unwrap_or_else(|| relay.config().entry_document.clone()),
        );
        let bridge = chessdao_bridge::platform_bridge();

        info!(
            platform = bridge.platform_name(),
            config = %config_path.display(),
            scheme = %relay.config().custom_scheme,
            "shell services initialised"
        );

        Ok(Self {
            config_path,
            relay,
            webview,
            bridge,
        })
    }

    pub fn config(&self) -> &ShellConfig {
        self.relay.config()
    }

    pub fn webview(&self) -> &MemoryWebView {
        &self.webview
    }

    /// Persist the effective config, returning where it was written.
    pub fn save_config(&self) -> Result<&Path> {
        data_dir::ensure_parent(&self.config_path)?;
        self.config().save(&self.config_path)?;
        info!(path = %self.config_path.display(), "configuration saved");
        Ok(&self.config_path)
    }

    /// Handle the intent the process was started with, as `onStart` does.
    pub fn cold_start(&mut self) -> Result<Report> {
        let uri = self.bridge.launch_uri()?;
        self.launch(ActivationRequest::new(uri))
    }

    pub fn launch(&mut self, request: ActivationRequest) -> Result<Report> {
        let id = request.id;
        let outcome = self.relay.handle_launch(request, Some(&self.webview))?;
        Ok(report(id, Phase::Launch, outcome))
    }

    pub fn resume(&mut self, request: ActivationRequest) -> Result<Report> {
        let id = request.id;
        let outcome = self.relay.handle_resume(request, Some(&self.webview))?;
        Ok(report(id, Phase::Resume, outcome))
    }

    /// Run a script of `launch <uri>` / `resume <uri>` lines, writing one
    /// JSON report per request. Blank lines and `#` comments are skipped;
    /// unknown commands are logged and skipped. Returns the number of
    /// requests handled.
    pub fn replay<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<usize> {
        let mut handled = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let Some(step) = parse_script_line(&line) else {
                continue;
            };
            let (phase, uri) = match step {
                Ok(step) => step,
                Err(bad) => {
                    warn!(line = index + 1, command = %bad, "unknown replay command");
                    continue;
                }
            };
            let request = ActivationRequest::with_locator(uri);
            let report = match phase {
                Phase::Launch => self.launch(request)?,
                Phase::Resume => self.resume(request)?,
            };
            write_report(&mut out, &report)?;
            handled += 1;
        }
        Ok(handled)
    }
}

/// Write a report as a single JSON line.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Parse one replay line. `None` for blank lines and comments, `Err` with the
/// offending command word for anything that is not `launch`/`resume <uri>`.
pub fn parse_script_line(line: &str) -> Option<std::result::Result<(Phase, &str), String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (command, uri) = line
        .split_once(char::is_whitespace)
        .map(|(c, u)| (c, u.trim()))
        .unwrap_or((line, ""));
    let phase = match command {
        "launch" => Phase::Launch,
        "resume" => Phase::Resume,
        other => return Some(Err(other.to_owned())),
    };
    if uri.is_empty() {
        return Some(Err(line.to_owned()));
    }
    Some(Ok((phase, uri)))
}

fn report(request: RequestId, phase: Phase, outcome: RelayOutcome) -> Report {
    let message = humanize_outcome(&outcome);
    Report {
        request,
        phase,
        outcome,
        message,
    }
}

fn load_config(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no configuration file, using defaults");
        return Ok(ShellConfig::default());
    }
    ShellConfig::load(path)
}
