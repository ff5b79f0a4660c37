// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ChessDAO shell harness.
//
// Entry point. Initialises logging and shell services, then feeds activation
// requests through the deeplink relay against an in-memory web view. Reports
// go to stdout as JSON lines; logs go to stderr.

mod services;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use chessdao_core::ActivationRequest;
use chessdao_core::error::Result;
use chessdao_relay::DocumentHost;
use clap::{Parser, Subcommand};

use services::shell_services::{ShellServices, write_report};

/// Drive the ChessDAO deeplink relay without a device.
#[derive(Parser, Debug)]
#[command(name = "chessdao-shell")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the shell configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address the web view shows before the first request
    /// (defaults to the entry document)
    #[arg(long)]
    current: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Relay an initial activation (activity start)
    Launch {
        /// Activation URI, e.g. chessdao://callback?nonce=...
        uri: String,
    },

    /// Relay a re-activation (new intent while running)
    Resume {
        /// Activation URI
        uri: String,
    },

    /// Handle the launch URI from the platform bridge, then read
    /// `launch <uri>` / `resume <uri>` lines from stdin
    Replay,

    /// Print the wallet redirect link for the configured scheme
    RedirectLink,

    /// Write the effective configuration to the config path
    InitConfig,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "ChessDAO shell harness starting");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chessdao-shell failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut svc = ShellServices::init(cli.config, cli.current)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Launch { uri } => {
            let report = svc.launch(ActivationRequest::with_locator(uri))?;
            write_report(&mut out, &report)?;
        }
        Commands::Resume { uri } => {
            let report = svc.resume(ActivationRequest::with_locator(uri))?;
            write_report(&mut out, &report)?;
        }
        Commands::Replay => {
            let report = svc.cold_start()?;
            write_report(&mut out, &report)?;
            let handled = svc.replay(std::io::stdin().lock(), &mut out)?;
            let current = svc.webview().current_url()?;
            tracing::info!(handled, current = ?current, "replay finished");
        }
        Commands::RedirectLink => {
            writeln!(out, "{}", svc.config().redirect_link())?;
        }
        Commands::InitConfig => {
            let path = svc.save_config()?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}
