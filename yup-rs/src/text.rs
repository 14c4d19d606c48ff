//! Text normalization for rendered modules.
//!
//! A generic code serializer escapes non-ASCII characters as `\uXXXX`
//! code units. [`ensure_readable_text`] reverses that escaping and then
//! decodes any percent-encoded byte sequences, restoring fully readable
//! source text. Both passes are unconditional and idempotent on text
//! that carries no escapes.

use once_cell::sync::Lazy;
use regex::Regex;

static UNICODE_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("unicode escape pattern"));

static PERCENT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:%[0-9a-fA-F]{2})+").expect("percent escape pattern"));

/// Restore readable text from serializer output.
pub fn ensure_readable_text(text: &str) -> String {
    decode_percent_escapes(&decode_unicode_escapes(text))
}

/// Replace every `\uXXXX` escape with the literal character.
///
/// Adjacent escapes forming a UTF-16 surrogate pair are combined into
/// one character; a lone surrogate has no scalar value and is left as
/// written.
fn decode_unicode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut matches = UNICODE_ESCAPE.captures_iter(text).peekable();

    while let Some(caps) = matches.next() {
        let m = caps.get(0).expect("whole match");
        out.push_str(&text[last..m.start()]);
        last = m.end();

        let unit = u32::from_str_radix(&caps[1], 16).expect("4 hex digits");
        match unit {
            0xD800..=0xDBFF => {
                let low = matches.peek().and_then(|next| {
                    let nm = next.get(0)?;
                    if nm.start() != m.end() {
                        return None;
                    }
                    let low = u32::from_str_radix(next.get(1)?.as_str(), 16).ok()?;
                    (0xDC00..=0xDFFF).contains(&low).then_some((low, nm.end()))
                });
                match low {
                    Some((low, end)) => {
                        let scalar = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                        out.push(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
                        last = end;
                        matches.next();
                    }
                    None => out.push_str(m.as_str()),
                }
            }
            0xDC00..=0xDFFF => out.push_str(m.as_str()),
            _ => out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)),
        }
    }

    out.push_str(&text[last..]);
    out
}

/// Decode runs of `%XX` byte escapes as UTF-8.
///
/// A run whose bytes do not form valid UTF-8 is left as written.
fn decode_percent_escapes(text: &str) -> String {
    PERCENT_RUN
        .replace_all(text, |caps: &regex::Captures| {
            let run = &caps[0];
            let bytes: Option<Vec<u8>> = run
                .split('%')
                .skip(1)
                .map(|pair| u8::from_str_radix(pair, 16).ok())
                .collect();
            bytes
                .and_then(|bytes| String::from_utf8(bytes).ok())
                .unwrap_or_else(|| run.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_is_unchanged() {
        let text = "export default object({\n  age: number().min(0)\n});\n";
        assert_eq!(ensure_readable_text(text), text);
    }

    #[test]
    fn test_decodes_bmp_escapes() {
        assert_eq!(ensure_readable_text("\\u8def\\u5f84"), "路径");
        assert_eq!(ensure_readable_text("a \\u00e9 b"), "a é b");
    }

    #[test]
    fn test_decodes_surrogate_pairs() {
        assert_eq!(ensure_readable_text("\\ud83d\\ude00"), "😀");
        assert_eq!(ensure_readable_text("x\\ud83d\\ude00y"), "x😀y");
    }

    #[test]
    fn test_lone_surrogate_is_left_as_written() {
        assert_eq!(ensure_readable_text("\\ud83d rest"), "\\ud83d rest");
        assert_eq!(ensure_readable_text("\\ude00"), "\\ude00");
    }

    #[test]
    fn test_decodes_percent_escapes() {
        assert_eq!(ensure_readable_text("a%20b"), "a b");
        assert_eq!(ensure_readable_text("%E8%B7%AF"), "路");
    }

    #[test]
    fn test_invalid_percent_run_is_left_as_written() {
        // 0xFF alone is not valid UTF-8.
        assert_eq!(ensure_readable_text("%ff"), "%ff");
        // A bare percent sign never matches the run pattern.
        assert_eq!(ensure_readable_text("100%"), "100%");
    }

    #[test]
    fn test_both_passes_apply() {
        assert_eq!(ensure_readable_text("\\u8def %20 end"), "路   end");
    }

    #[test]
    fn test_idempotent_on_decoded_output() {
        let decoded = ensure_readable_text("\\u8def\\u5f84");
        assert_eq!(ensure_readable_text(&decoded), decoded);
    }
}
