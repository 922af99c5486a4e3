//! Percent-encoding of internal references as IRIs.
//!
//! Only unsafe ASCII is escaped; non-ASCII characters stay readable.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::error::HrefResult;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// `true` for every ASCII code point that must be escaped.
static IRI_UNSAFE: [bool; 128] = iri_unsafe_table();

const fn iri_unsafe_table() -> [bool; 128] {
    let mut table = [true; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        if b.is_ascii_alphanumeric() || matches!(b, b'#' | b'_' | b'.' | b'-' | b'/' | b'~') {
            table[i] = false;
        }
        i += 1;
    }
    table
}

/// Length of a leading `scheme://` prefix, if any.
fn scheme_prefix_len(href: &str) -> Option<usize> {
    static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = SCHEME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());
    re.find(href).map(|m| m.end())
}

/// Quote `href` as an IRI.
///
/// A leading `scheme://` is kept verbatim. Every other ASCII character outside
/// letters, digits and `# _ . - / ~` becomes `%xx` (lowercase hex). Quoting an
/// already quoted href escapes its `%` again.
pub fn quote_iri(href: &str) -> String {
    let (scheme, rest) = match scheme_prefix_len(href) {
        Some(len) => {
            log::trace!("keeping scheme prefix '{}'", &href[..len]);
            href.split_at(len)
        }
        None => ("", href),
    };

    let mut out = String::with_capacity(href.len());
    out.push_str(scheme);
    for ch in rest.chars() {
        let cp = ch as u32;
        if cp < 128 && IRI_UNSAFE[cp as usize] {
            out.push('%');
            out.push(HEX_DIGITS[(cp >> 4) as usize] as char);
            out.push(HEX_DIGITS[(cp & 0xf) as usize] as char);
        } else {
            out.push(ch);
        }
    }
    out
}

/// [`quote_iri`] over raw bytes, which must be valid UTF-8.
pub fn quote_iri_bytes(href: &[u8]) -> HrefResult<String> {
    let href = std::str::from_utf8(href)?;
    Ok(quote_iri(href))
}

/// Decode `%XX` escapes. Malformed escapes are passed through unchanged and
/// escaped bytes that are not UTF-8 decode to U+FFFD.
pub fn unquote_iri(href: &str) -> String {
    let decoded = percent_decode_str(href).decode_utf8_lossy();
    if decoded.contains(char::REPLACEMENT_CHARACTER) && !href.contains(char::REPLACEMENT_CHARACTER) {
        log::debug!("replaced non UTF-8 escapes while decoding '{}'", href);
    }
    decoded.into_owned()
}

/// [`unquote_iri`] over raw bytes, which must be valid UTF-8.
pub fn unquote_iri_bytes(href: &[u8]) -> HrefResult<String> {
    let href = std::str::from_utf8(href)?;
    Ok(unquote_iri(href))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HrefError;

    #[test]
    fn safe_characters_pass_through() {
        assert_eq!(quote_iri("OEBPS/Text/ch_1-a.xhtml#sec~2"), "OEBPS/Text/ch_1-a.xhtml#sec~2");
    }

    #[test]
    fn unsafe_ascii_is_lowercase_hex() {
        assert_eq!(quote_iri("a b"), "a%20b");
        assert_eq!(quote_iri("x?y=1&z"), "x%3fy%3d1%26z");
        assert_eq!(quote_iri("100%"), "100%25");
        assert_eq!(quote_iri("tab\there"), "tab%09here");
    }

    #[test]
    fn non_ascii_is_never_escaped() {
        assert_eq!(quote_iri("Texte/café été.xhtml"), "Texte/café%20été.xhtml");
        assert_eq!(quote_iri("日本語/章.xhtml"), "日本語/章.xhtml");
    }

    #[test]
    fn scheme_prefix_is_kept() {
        assert_eq!(quote_iri("http://example.com/a b"), "http://example.com/a%20b");
        assert_eq!(quote_iri("HTTPS://x.org/?q"), "HTTPS://x.org/%3fq");
        // only the leading prefix counts
        assert_eq!(quote_iri("a b://c"), "a%20b%3a//c");
    }

    #[test]
    fn scheme_without_slashes_is_not_excised() {
        assert_eq!(quote_iri("mailto:me@example.org"), "mailto%3ame%40example.org");
    }

    #[test]
    fn quoting_twice_double_escapes() {
        let once = quote_iri("a b");
        assert_eq!(quote_iri(&once), "a%2520b");
    }

    #[test]
    fn unquote_decodes_escapes() {
        assert_eq!(unquote_iri("a%20b"), "a b");
        assert_eq!(unquote_iri("caf%c3%a9"), "café");
        assert_eq!(unquote_iri("caf%C3%A9"), "café");
    }

    #[test]
    fn unquote_passes_malformed_escapes_through() {
        assert_eq!(unquote_iri("100%"), "100%");
        assert_eq!(unquote_iri("%zz%4"), "%zz%4");
    }

    #[test]
    fn unquote_replaces_latin1_escapes() {
        assert_eq!(unquote_iri("caf%e9.xhtml"), "caf\u{fffd}.xhtml");
        assert_eq!(unquote_iri("%ff%fe"), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn byte_inputs_must_be_utf8() {
        assert_eq!(quote_iri_bytes(b"a b").unwrap(), "a%20b");
        assert_eq!(unquote_iri_bytes(b"a%20b").unwrap(), "a b");
        assert!(matches!(quote_iri_bytes(&[0x61, 0xff]), Err(HrefError::Decoding(_))));
        assert!(matches!(unquote_iri_bytes(&[0xc3]), Err(HrefError::Decoding(_))));
        assert_eq!(unquote_iri_bytes(b"caf%e9").unwrap(), "caf\u{fffd}");
    }

    #[test]
    fn round_trip_without_percent() {
        let href = "Text/My Chapter (1) [draft]; v2!.xhtml";
        assert_eq!(unquote_iri(&quote_iri(href)), href);
    }
}
