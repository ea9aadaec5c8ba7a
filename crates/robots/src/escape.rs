// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

//! Percent-escape canonicalization for paths and directive patterns.
//!
//! Directive values arrive with inconsistent escaping: lowercase hex
//! (`%2f`), raw non-ASCII bytes (`/SanJosé`), or already-canonical `%2F`.
//! Two values are policy-equivalent only after normalization, so both the
//! request path and the pattern pass through [`maybe_escape`] before
//! matching.

use std::borrow::Cow;

use percent_encoding::percent_encode_byte;

/// Canonicalizes the percent-escaping of `src`.
///
/// Existing `%XX` escapes are rewritten with uppercase hex digits and bytes
/// with the high bit set are percent-encoded. Returns `Cow::Borrowed` when
/// the input is already canonical, which is the common case for
/// well-behaved robots.txt files.
///
/// A trailing `%`, a `%` followed by a single hex digit, or a `%` followed
/// by non-hex bytes is literal text, not an escape, and passes through
/// untouched. The output is always ASCII and never shorter than the input.
pub fn maybe_escape(src: &str) -> Cow<'_, str> {
    let bytes = src.as_bytes();

    // First scan the buffer to see if changes are needed. Most don't.
    let mut num_to_escape = 0;
    let mut needs_capitalize = false;
    let mut i = 0;
    while i < bytes.len() {
        if let Some((hi, lo)) = hex_escape_at(bytes, i) {
            if hi.is_ascii_lowercase() || lo.is_ascii_lowercase() {
                needs_capitalize = true;
            }
            i += 3;
        } else {
            if bytes[i] & 0x80 != 0 {
                num_to_escape += 1;
            }
            i += 1;
        }
    }

    if num_to_escape == 0 && !needs_capitalize {
        return Cow::Borrowed(src);
    }

    let mut out = String::with_capacity(bytes.len() + num_to_escape * 2);
    let mut i = 0;
    while i < bytes.len() {
        if let Some((hi, lo)) = hex_escape_at(bytes, i) {
            out.push('%');
            out.push(hi.to_ascii_uppercase() as char);
            out.push(lo.to_ascii_uppercase() as char);
            i += 3;
        } else if bytes[i] & 0x80 != 0 {
            // Octets outside the ASCII range; UTF-8 text escapes to one
            // %XX triplet per byte.
            out.push_str(percent_encode_byte(bytes[i]));
            i += 1;
        } else {
            out.push(bytes[i] as char);
            i += 1;
        }
    }

    Cow::Owned(out)
}

/// Returns the two hex digits of a `%XX` escape starting at `i`, or `None`
/// if the bytes at `i` do not form a complete escape.
fn hex_escape_at(bytes: &[u8], i: usize) -> Option<(u8, u8)> {
    if bytes[i] != b'%' {
        return None;
    }
    match bytes.get(i + 1..i + 3) {
        Some(&[hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => Some((hi, lo)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
