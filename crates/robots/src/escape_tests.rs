// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    plain_url_unchanged = { "http://www.example.com", "http://www.example.com" },
    plain_path_unchanged = { "/a/b/c", "/a/b/c" },
    empty_unchanged = { "", "" },
    lowercase_hex_capitalized = { "%aa", "%AA" },
    mixed_hex_capitalized = { "/path%2fto%2Ffile", "/path%2Fto%2Ffile" },
    uppercase_hex_untouched = { "/a%2Fb", "/a%2Fb" },
    non_ascii_escaped = { "á", "%C3%A1" },
    non_ascii_in_path = { "/SanJoséSellers", "/SanJos%C3%A9Sellers" },
    trailing_percent_literal = { "/100%", "/100%" },
    percent_one_digit_literal = { "/a%2", "/a%2" },
    percent_non_hex_literal = { "/a%zz", "/a%zz" },
    percent_then_real_escape = { "%%2f", "%%2F" },
    wildcard_untouched = { "/*.php$", "/*.php$" },
)]
fn maybe_escape_cases(input: &str, expected: &str) {
    assert_eq!(maybe_escape(input), expected);
}

#[test]
fn canonical_input_borrows() {
    // The fast path hands back the input without allocating.
    assert!(matches!(maybe_escape("/a/b/c"), Cow::Borrowed(_)));
    assert!(matches!(maybe_escape("/a%2Fb?c=d"), Cow::Borrowed(_)));
    assert!(matches!(maybe_escape(""), Cow::Borrowed(_)));
}

#[test]
fn changed_input_allocates() {
    assert!(matches!(maybe_escape("%aa"), Cow::Owned(_)));
    assert!(matches!(maybe_escape("á"), Cow::Owned(_)));
}

#[test]
fn literal_percent_is_not_rescanned_as_escape() {
    // "%e9" is a complete escape; the 'é' after it still needs encoding.
    assert_eq!(maybe_escape("%e9é"), "%E9%C3%A9");
}

#[test]
fn multibyte_sequences_escape_per_byte() {
    // U+20AC EURO SIGN is three UTF-8 bytes.
    assert_eq!(maybe_escape("/€"), "/%E2%82%AC");
}

proptest! {
    #[test]
    fn escaping_is_idempotent(s in "\\PC{0,64}") {
        let once = maybe_escape(&s).into_owned();
        let twice = maybe_escape(&once).into_owned();
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn output_is_ascii_and_no_shorter(s in "\\PC{0,64}") {
        let out = maybe_escape(&s);
        prop_assert!(out.is_ascii());
        prop_assert!(out.len() >= s.len());
    }

    #[test]
    fn ascii_without_escapes_is_fast_path(s in "[ -$&-~]{0,64}") {
        // Printable ASCII with '%' excluded never needs rewriting.
        prop_assert!(matches!(maybe_escape(&s), Cow::Borrowed(_)));
    }
}
