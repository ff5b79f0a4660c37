// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Structured locator handling.
//
// Addresses are parsed with `url` and rebuilt with `set_query`, so a `?`
// that is part of a percent-encoded path never splits the address.

use chessdao_core::{ShellConfig, SkipReason};
use url::Url;

/// Parse a raw activation URI and check it carries the custom scheme.
pub fn matching_locator(raw: Option<&str>, config: &ShellConfig) -> Result<Url, SkipReason> {
    let raw = raw
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or(SkipReason::NoLocator)?;
    let url = Url::parse(raw).map_err(|_| SkipReason::MalformedLocator)?;
    if !config.matches_scheme(url.scheme()) {
        return Err(SkipReason::SchemeMismatch {
            scheme: url.scheme().to_owned(),
        });
    }
    Ok(url)
}

/// The locator's raw query, with an empty query treated as absent.
pub fn callback_query(locator: &Url) -> Option<&str> {
    locator.query().filter(|q| !q.is_empty())
}

/// Initial-load target: the entry document carrying `query`.
///
/// With no query the bare entry document is returned (no trailing `?`).
pub fn launch_target(entry: &Url, query: Option<&str>) -> Url {
    let mut target = entry.clone();
    target.set_query(query);
    target
}

/// Reload target: everything before the current address's first `?`, with
/// `?query` appended.
///
/// A fragment that follows the old query goes with it. When the address has
/// no query, a hash route such as `#/game/42` is part of the base and the new
/// query lands after it, where the web app's `href.indexOf('?')` finds it.
pub fn resume_target(current: &str, query: &str) -> Result<Url, url::ParseError> {
    let mut target = Url::parse(current)?;
    if target.query().is_some() {
        target.set_fragment(None);
        target.set_query(Some(query));
        return Ok(target);
    }
    match target.fragment() {
        Some(fragment) => {
            let route = fragment.split_once('?').map_or(fragment, |(route, _)| route);
            let routed = format!("{route}?{query}");
            target.set_fragment(Some(&routed));
        }
        None => target.set_query(Some(query)),
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Url {
        Url::parse("file:///android_asset/public/index.html").unwrap()
    }

    #[test]
    fn missing_or_blank_locator() {
        let config = ShellConfig::default();
        assert_eq!(matching_locator(None, &config), Err(SkipReason::NoLocator));
        assert_eq!(matching_locator(Some("  "), &config), Err(SkipReason::NoLocator));
    }

    #[test]
    fn unparseable_locator() {
        let config = ShellConfig::default();
        assert_eq!(
            matching_locator(Some("not a uri"), &config),
            Err(SkipReason::MalformedLocator)
        );
    }

    #[test]
    fn foreign_scheme() {
        let config = ShellConfig::default();
        assert_eq!(
            matching_locator(Some("https://phantom.app/ul/v1/connect?x=1"), &config),
            Err(SkipReason::SchemeMismatch {
                scheme: "https".into()
            })
        );
    }

    #[test]
    fn custom_scheme_with_query() {
        let config = ShellConfig::default();
        let url = matching_locator(Some("chessdao://callback?foo=1&bar=2"), &config).unwrap();
        assert_eq!(callback_query(&url), Some("foo=1&bar=2"));
    }

    #[test]
    fn empty_query_is_absent() {
        let config = ShellConfig::default();
        let bare = matching_locator(Some("chessdao://callback"), &config).unwrap();
        assert_eq!(callback_query(&bare), None);
        let dangling = matching_locator(Some("chessdao://callback?"), &config).unwrap();
        assert_eq!(callback_query(&dangling), None);
    }

    #[test]
    fn launch_target_appends_query() {
        let target = launch_target(&entry(), Some("foo=1&bar=2"));
        assert_eq!(
            target.as_str(),
            "file:///android_asset/public/index.html?foo=1&bar=2"
        );
    }

    #[test]
    fn launch_target_percent_encodes_query() {
        let target = launch_target(&entry(), Some("a='x'&b=<y>"));
        assert_eq!(
            target.as_str(),
            "file:///android_asset/public/index.html?a=%27x%27&b=%3Cy%3E"
        );
    }

    #[test]
    fn launch_target_without_query() {
        let target = launch_target(&entry(), None);
        assert_eq!(target.as_str(), "file:///android_asset/public/index.html");
    }

    #[test]
    fn resume_target_replaces_query_and_fragment() {
        let target = resume_target(
            "file:///android_asset/public/index.html?old=1#/lobby",
            "foo=3",
        )
        .unwrap();
        assert_eq!(
            target.as_str(),
            "file:///android_asset/public/index.html?foo=3"
        );
    }

    #[test]
    fn resume_target_keeps_hash_route_without_query() {
        let target =
            resume_target("file:///android_asset/public/index.html#/game/42", "foo=3").unwrap();
        assert_eq!(
            target.as_str(),
            "file:///android_asset/public/index.html#/game/42?foo=3"
        );
    }

    #[test]
    fn resume_target_replaces_query_inside_hash_route() {
        let target = resume_target(
            "file:///android_asset/public/index.html#/game/42?old=1",
            "foo=3",
        )
        .unwrap();
        assert_eq!(
            target.as_str(),
            "file:///android_asset/public/index.html#/game/42?foo=3"
        );
    }

    #[test]
    fn locator_with_space_in_authority_is_malformed() {
        let config = ShellConfig::default();
        assert_eq!(
            matching_locator(Some("chessdao://call back?x=1"), &config),
            Err(SkipReason::MalformedLocator)
        );
    }

    #[test]
    fn resume_target_keeps_encoded_question_mark_in_path() {
        let target = resume_target("https://chessdao.app/play%3Fboard/index.html?old=1", "foo=3")
            .unwrap();
        assert_eq!(
            target.as_str(),
            "https://chessdao.app/play%3Fboard/index.html?foo=3"
        );
    }

    #[test]
    fn resume_target_rejects_relative_address() {
        assert!(resume_target("index.html?old=1", "foo=3").is_err());
    }
}
