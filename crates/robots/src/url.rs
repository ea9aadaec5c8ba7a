// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

//! URL plumbing for crawl targets.
//!
//! [`path_params_query`] pulls the path+params+query portion out of a raw
//! URL string without constructing a full URI: robots.txt-governed URLs are
//! not guaranteed well-formed, so this is a tolerant scanner rather than a
//! parser. [`combine`] builds absolute crawl targets from the links the
//! surrounding crawler extracts.

use std::borrow::Cow;

use ::url::{ParseError, Url};
use memchr::{memchr, memchr3, memmem};

use crate::error::{Error, Result};

/// Extracts the path (with params) and query part from a URL, dropping
/// scheme, authority, and fragment. The result always starts with `/`;
/// degenerate or unparseable input yields `/`.
///
/// Borrows from the input whenever the result is a plain substring; only
/// the `?`/`;`-first cases and the `/` fallback allocate.
pub fn path_params_query(url: &str) -> Cow<'_, str> {
    let bytes = url.as_bytes();

    // Initial two slashes are a protocol-relative marker, not a path.
    let search_start = if bytes.len() >= 2 && bytes[0] == b'/' && bytes[1] == b'/' {
        2
    } else {
        0
    };

    let early_path = memchr3(b'/', b'?', b';', &bytes[search_start..]).map(|i| i + search_start);
    let protocol_end = memmem::find(&bytes[search_start..], b"://").map(|i| i + search_start);

    // If a path, param, or query starts before "://", the "://" does not
    // mark a protocol and there is no authority to skip.
    let scan_from = match (early_path, protocol_end) {
        (Some(early), Some(proto)) if early < proto => search_start,
        (_, Some(proto)) => proto + 3,
        _ => search_start,
    };

    let Some(path_start) = memchr3(b'/', b'?', b';', &bytes[scan_from..]).map(|i| i + scan_from)
    else {
        return Cow::Borrowed("/");
    };

    let hash = memchr(b'#', &bytes[search_start..]).map(|i| i + search_start);
    if hash.is_some_and(|h| h < path_start) {
        // Everything after the hash is fragment; no path remains.
        return Cow::Borrowed("/");
    }
    let path_end = hash.unwrap_or(bytes.len());

    // The delimiters searched for are all ASCII, so these offsets sit on
    // character boundaries.
    let found = &url[path_start..path_end];
    if bytes[path_start] == b'/' {
        Cow::Borrowed(found)
    } else {
        // Result would start with '?' or ';'.
        Cow::Owned(format!("/{found}"))
    }
}

/// Base used to normalize bare relative references before splicing them
/// onto the real base path. The host never appears in the output.
const SCRATCH_BASE: &str = "http://scurry.invalid/";

/// Builds an absolute crawl target from `base` and an extracted link.
///
/// Absolute paths and scheme-qualified references resolve with standard
/// URL join semantics. A bare relative reference is treated as relative to
/// the base *path* (not its parent directory): `example` against
/// `http://h/a?q` yields `http://h/a/example`. The crawl frontier treats
/// the page it found the link on as a directory, which deviates from plain
/// RFC 3986 resolution on purpose.
pub fn combine(base: &Url, relative: &str) -> Result<Url> {
    if relative.starts_with('/') || has_scheme_prefix(relative) {
        return base
            .join(relative)
            .map_err(|e| combine_error(relative, e));
    }

    // Resolve against a throwaway base to collapse dot segments and split
    // the path from the query, then graft the path onto the real base.
    let scratch = Url::parse(SCRATCH_BASE).map_err(|e| combine_error(relative, e))?;
    let resolved = scratch
        .join(relative)
        .map_err(|e| combine_error(relative, e))?;

    let mut target = base.clone();
    let spliced = format!("{}{}", base.path().trim_end_matches('/'), resolved.path());
    target.set_path(&spliced);
    target.set_query(resolved.query());
    target.set_fragment(None);
    Ok(target)
}

/// True when the reference begins with an ASCII-alphabetic run followed by
/// `:`, e.g. `mailto:` or `https:`.
fn has_scheme_prefix(s: &str) -> bool {
    let run = s.bytes().take_while(u8::is_ascii_alphabetic).count();
    run > 0 && s.as_bytes().get(run) == Some(&b':')
}

fn combine_error(relative: &str, source: ParseError) -> Error {
    Error::Combine {
        relative: relative.to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
