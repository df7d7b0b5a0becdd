//! ICS text value escaping per RFC 5545.

/// Escape a text value for use in an ICS property.
///
/// Backslashes are doubled first so that the backslashes introduced by the
/// later substitutions are not escaped again. CRLF and lone CR are
/// normalized to LF before newlines are escaped, so all three newline forms
/// produce the same output.
pub fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Unescape an ICS text value (reverse of [`escape_value`]).
///
/// Reverses: `\,` → `,` and `\;` → `;` and `\\` → `\` and `\n` → newline.
pub fn unescape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(',') => {
                    result.push(',');
                    chars.next();
                }
                Some(';') => {
                    result.push(';');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('n') | Some('N') => {
                    result.push('\n');
                    chars.next();
                }
                // Keep backslash if not a recognized escape
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_value("a,b"), "a\\,b");
        assert_eq!(escape_value("a;b"), "a\\;b");
        assert_eq!(escape_value("a\\b"), "a\\\\b");
        assert_eq!(escape_value("a\nb"), "a\\nb");
    }

    #[test]
    fn test_escape_backslash_before_other_substitutions() {
        // A literal backslash-n sequence must not collapse into an escaped newline
        assert_eq!(escape_value("a\\nb"), "a\\\\nb");
        assert_eq!(unescape_value(&escape_value("a\\nb")), "a\\nb");
    }

    #[test]
    fn test_escape_normalizes_newline_forms() {
        let escaped = escape_value("line1\nline2");
        assert_eq!(escape_value("line1\r\nline2"), escaped);
        assert_eq!(escape_value("line1\rline2"), escaped);
        assert_eq!(escaped, "line1\\nline2");
    }

    #[test]
    fn test_escape_unescape_round_trip() {
        let inputs = [
            "plain",
            "commas, semicolons; and \\ backslashes",
            "multi\nline\ntext",
            "tricky \\, already-escaped-looking",
            "",
        ];
        for input in inputs {
            assert_eq!(unescape_value(&escape_value(input)), input, "input: {input:?}");
        }
    }

    #[test]
    fn test_round_trip_normalizes_cr_to_lf() {
        assert_eq!(unescape_value(&escape_value("a\r\nb")), "a\nb");
        assert_eq!(unescape_value(&escape_value("a\rb")), "a\nb");
    }

    #[test]
    fn test_unescape_keeps_unrecognized_escapes() {
        assert_eq!(unescape_value("a\\tb"), "a\\tb");
    }
}
