//! Redirect recovery for static hosts without path routing.
//!
//! Such hosts answer unknown paths with a `404.html` that bounces the browser
//! to the site root, carrying the original location in the query:
//!
//! ```text
//! /blogs/x?q=1#frag  →  /?path=blogs%2Fx&params=%3Fq%3D1#frag
//! ```
//!
//! [`recover`] computes the inverse. The router replaces the current history
//! entry with it before evaluating the path, so the visitor ends up on the
//! clean URL without an extra history entry.

use std::borrow::Cow;
use url::Url;

/// The clean site-relative URL encoded in a redirect, if `url` carries one.
///
/// `params` is percent-decoded twice: once as part of the query string and
/// once more on its own. A malformed second pass keeps the once-decoded text.
pub fn recover(url: &Url) -> Option<String> {
    let mut path = None;
    let mut params = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "path" if path.is_none() => path = Some(value),
            "params" if params.is_none() => params = Some(value),
            _ => {}
        }
    }

    let path = path.filter(|p| !p.is_empty())?;
    let params = params.map(decode_again).unwrap_or_default();
    let hash = url
        .fragment()
        .filter(|f| !f.is_empty())
        .map(|f| format!("#{f}"))
        .unwrap_or_default();

    Some(format!("/{path}{params}{hash}"))
}

fn decode_again(value: Cow<'_, str>) -> String {
    match urlencoding::decode(&value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.into_owned(),
    }
}
