// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

//! Anchored-glob matching of request paths against directive patterns.
//!
//! Patterns are anchored at the start of the path; `*` matches any run of
//! bytes and `$` is special only as the last pattern byte. Both strings are
//! externally determined, so the matcher runs a Thompson-style simulation
//! over an explicit position list rather than backtracking: worst case is
//! `O(path * pattern)` time and `O(path)` space, where a naive recursive
//! matcher is exponential on patterns like `a*a*a*...`.

/// Returns true if `path` matches the robots.txt directive `pattern`.
///
/// Matching is bytewise. Callers normalize both sides with
/// [`maybe_escape`](crate::escape::maybe_escape) first, so that `%2f` and
/// `%2F` compare equal.
///
/// An empty pattern matches every path; a pattern of just `$` matches only
/// the empty path. Malformed patterns are matched literally, never rejected.
pub fn matches(path: &str, pattern: &str) -> bool {
    let path = path.as_bytes();
    let pattern = pattern.as_bytes();

    // Sorted list of indexes into `path` whose prefixes are still
    // consistent with the pattern consumed so far. Once it empties, no
    // later pattern byte can resurrect a match.
    let mut positions: Vec<usize> = Vec::with_capacity(path.len() + 1);
    positions.push(0);

    for (i, &pat) in pattern.iter().enumerate() {
        if pat == b'$' && i + 1 == pattern.len() {
            // End anchor: some live prefix must span the whole path.
            return positions.last().copied() == Some(path.len());
        }

        if pat == b'*' {
            // A wildcard extends every live prefix to all longer ones, so
            // the set collapses to a contiguous range.
            let lowest = positions[0];
            positions.clear();
            positions.extend(lowest..=path.len());
        } else {
            // Literal byte, including '$' anywhere but the end.
            let mut kept = 0;
            for idx in 0..positions.len() {
                let at = positions[idx];
                if at < path.len() && path[at] == pat {
                    positions[kept] = at + 1;
                    kept += 1;
                }
            }
            positions.truncate(kept);
            if positions.is_empty() {
                return false;
            }
        }
    }

    // Pattern exhausted with a live prefix: robots.txt patterns are
    // prefix-anchored, so this is a match.
    true
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
