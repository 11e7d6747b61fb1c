//! Strict text decoding of response bodies.

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};

/// Resolve the charset declared in a Content-Type value, UTF-8 when absent,
/// unknown, or mapped to the replacement encoding (e.g. `iso-2022-kr`).
pub fn charset_from_content_type(content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(|value| {
            value.split(';').skip(1).find_map(|param| {
                let (name, label) = param.split_once('=')?;
                if name.trim().eq_ignore_ascii_case("charset") {
                    Some(label.trim().trim_matches('"'))
                } else {
                    None
                }
            })
        })
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .filter(|encoding| *encoding != REPLACEMENT)
        .unwrap_or(UTF_8)
}

/// Decode `bytes` without replacement characters. A byte order mark wins over
/// the declared charset. Returns the decoded text, or the name of the charset
/// the bytes were invalid for.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, &'static str> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (charset_from_content_type(content_type), bytes),
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| encoding.name())
}
