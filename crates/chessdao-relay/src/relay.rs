// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The deeplink relay itself.
//
// Both handlers run synchronously on the UI thread. Anything that is not a
// usable `chessdao://` callback yields `RelayOutcome::Skipped`, never an
// error; only a failing document host produces `Err`.

use chessdao_core::error::Result;
use chessdao_core::{ActivationRequest, CallbackKind, RelayOutcome, ShellConfig, SkipReason};
use tracing::{debug, info, warn};
use url::Url;

use crate::host::DocumentHost;
use crate::locator;

/// Relays wallet callback URIs into the embedded web document.
///
/// Holds the most recent activation request, mirroring the activity's
/// current intent.
#[derive(Debug)]
pub struct DeeplinkRelay {
    config: ShellConfig,
    entry: Url,
    current: Option<ActivationRequest>,
}

impl DeeplinkRelay {
    /// Build a relay. Fails if the configured entry document is not an
    /// absolute URL.
    pub fn new(config: ShellConfig) -> Result<Self> {
        config.validate()?;
        let entry = config.entry_url()?;
        Ok(Self {
            config,
            entry,
            current: None,
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Swap in a new configuration, keeping the current request. On error the
    /// relay is left unchanged.
    pub fn reconfigure(&mut self, config: ShellConfig) -> Result<()> {
        config.validate()?;
        self.entry = config.entry_url()?;
        self.config = config;
        Ok(())
    }

    /// The most recently received activation request.
    pub fn current_request(&self) -> Option<&ActivationRequest> {
        self.current.as_ref()
    }

    /// Initial activation (activity start).
    ///
    /// A matching locator sends the document to the entry document with the
    /// callback query attached.
    pub fn handle_launch(
        &mut self,
        request: ActivationRequest,
        host: Option<&dyn DocumentHost>,
    ) -> Result<RelayOutcome> {
        debug!(request = %request.id, locator = ?request.locator, "handling launch");
        let matched = locator::matching_locator(request.locator(), &self.config);
        self.current = Some(request);

        let locator = match matched {
            Ok(url) => url,
            Err(reason) => return Ok(skip(reason)),
        };
        let Some(host) = host else {
            return Ok(skip(SkipReason::NoDocumentHost));
        };

        let query = locator::callback_query(&locator);
        let target = locator::launch_target(&self.entry, query);
        navigate(host, &target, query)
    }

    /// Re-activation while the document is already loaded.
    ///
    /// The request always replaces the current one. A matching locator with a
    /// non-empty query reloads the current page with that query.
    pub fn handle_resume(
        &mut self,
        request: ActivationRequest,
        host: Option<&dyn DocumentHost>,
    ) -> Result<RelayOutcome> {
        debug!(request = %request.id, locator = ?request.locator, "handling resume");
        let matched = locator::matching_locator(request.locator(), &self.config);
        self.current = Some(request);

        let locator = match matched {
            Ok(url) => url,
            Err(reason) => return Ok(skip(reason)),
        };
        let Some(query) = locator::callback_query(&locator) else {
            return Ok(skip(SkipReason::EmptyQuery));
        };
        let Some(host) = host else {
            return Ok(skip(SkipReason::NoDocumentHost));
        };
        let Some(current) = host.current_url()? else {
            return Ok(skip(SkipReason::NoCurrentAddress));
        };

        let target = match locator::resume_target(&current, query) {
            Ok(target) => target,
            Err(e) => {
                warn!(current = %current, error = %e, "web view address is not a URL");
                return Ok(skip(SkipReason::MalformedCurrentAddress));
            }
        };
        navigate(host, &target, Some(query))
    }
}

fn navigate(host: &dyn DocumentHost, target: &Url, query: Option<&str>) -> Result<RelayOutcome> {
    let callback = CallbackKind::classify(query.unwrap_or_default());
    host.load_url(target.as_str())?;
    info!(url = %target, ?callback, "relayed deeplink into web view");
    Ok(RelayOutcome::Navigated {
        target: target.as_str().to_owned(),
        callback,
    })
}

fn skip(reason: SkipReason) -> RelayOutcome {
    debug!(%reason, "deeplink not relayed");
    RelayOutcome::Skipped(reason)
}
