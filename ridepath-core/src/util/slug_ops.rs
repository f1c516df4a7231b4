use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// escape set for location slugs: everything non-alphanumeric except the
/// hyphen, which is the slug's own word separator.
const SLUG_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-');

/// transforms free-text location display text into its URL slug form:
/// trimmed, lowercased, spaces to hyphens, then percent-encoded.
///
/// the transform is lossy for case and for literal hyphens in the source
/// text; comparisons after a URL round trip must be case-insensitive.
pub fn encode_slug(text: &str) -> String {
    let hyphenated = text.trim().to_lowercase().replace(' ', "-");
    utf8_percent_encode(&hyphenated, SLUG_ESCAPE).to_string()
}

/// inverse of [`encode_slug`]: percent-decodes and maps hyphens back to
/// spaces for display. invalid UTF-8 percent sequences decode lossily
/// rather than failing, since users can hand-edit URLs.
pub fn decode_slug(slug: &str) -> String {
    percent_decode_str(slug)
        .decode_utf8_lossy()
        .replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_slug_lowercases_and_hyphenates() {
        assert_eq!(encode_slug("Rome Airport"), "rome-airport");
        assert_eq!(encode_slug("Milan Central"), "milan-central");
    }

    #[test]
    fn test_encode_slug_trims() {
        assert_eq!(encode_slug("  Rome Airport  "), "rome-airport");
    }

    #[test]
    fn test_encode_slug_percent_encodes_reserved() {
        assert_eq!(encode_slug("Fiumicino/T3"), "fiumicino%2Ft3");
        assert_eq!(encode_slug("P&R Nord"), "p%26r-nord");
    }

    #[test]
    fn test_encode_slug_non_ascii() {
        // multi-byte characters percent-encode per UTF-8 byte
        assert_eq!(encode_slug("Zürich"), "z%C3%BCrich");
    }

    #[test]
    fn test_decode_slug_restores_spaces() {
        assert_eq!(decode_slug("rome-airport"), "rome airport");
    }

    #[test]
    fn test_decode_slug_percent_sequences() {
        assert_eq!(decode_slug("z%C3%BCrich"), "zürich");
        assert_eq!(decode_slug("p%26r-nord"), "p&r nord");
    }

    #[test]
    fn test_decode_slug_lossy_on_bad_sequence() {
        // garbled percent escapes must not fail
        let decoded = decode_slug("rome%FFairport");
        assert!(decoded.contains("rome"));
        assert!(decoded.contains("airport"));
    }

    #[test]
    fn test_round_trip_case_insensitive() {
        let original = "Rome Airport";
        let round = decode_slug(&encode_slug(original));
        assert_eq!(round, original.to_lowercase());
    }
}
