//! crates/catalog/src/escape.rs
//! Turns arbitrary value text into a token safe for a space separated `key=value` line.
//!
//! Values without special characters pass through untouched. Anything that
//! contains whitespace, a control character, or one of `\ = ' "` is wrapped
//! in double quotes, with control characters and the literal specials
//! backslash-escaped. The quoting decision may be discovered mid-value; the
//! opening quote is then inserted where the value started.

use std::fmt::{self, Write as _};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CharClass {
    Ordinary,
    Whitespace,
    Special,
    Control,
}

fn classify(c: char) -> CharClass {
    if u32::from(c) < 0x20 {
        CharClass::Control
    } else if matches!(c, '\\' | '=' | '\'' | '"') {
        CharClass::Special
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Ordinary
    }
}

/// Returns `true` when `text` would be quoted by [`escape`].
#[must_use]
pub fn needs_quoting(text: &str) -> bool {
    text.chars().any(|c| classify(c) != CharClass::Ordinary)
}

/// Escapes `text` into a standalone token.
///
/// ```
/// use catalog::escape;
///
/// assert_eq!(escape("room"), "room");
/// assert_eq!(escape("Floor 4,\toffice 45\n"), r#""Floor 4,\toffice 45\n""#);
/// assert_eq!(escape("a=b"), r#""a\=b""#);
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut escaper = Escaper::new(&mut out);
    escaper.push_str(text);
    escaper.finish();
    out
}

/// Formats `value` and appends its escaped form to `out`.
///
/// The value is streamed through an [`Escaper`], so no intermediate string
/// is built. Errors come only from the value's own `Display` implementation.
pub fn escape_display_into(out: &mut String, value: &dyn fmt::Display) -> fmt::Result {
    let mut escaper = Escaper::new(out);
    write!(escaper, "{value}")?;
    escaper.finish();
    Ok(())
}

/// Streaming escaper appending to a borrowed `String`.
///
/// Everything written through [`fmt::Write`] is treated as one value. Call
/// [`finish`](Self::finish) once the value is complete to emit the closing
/// quote.
#[derive(Debug)]
pub struct Escaper<'a> {
    out: &'a mut String,
    start: usize,
    quoted: bool,
}

impl<'a> Escaper<'a> {
    /// Starts a value at the current end of `out`.
    pub fn new(out: &'a mut String) -> Self {
        let start = out.len();
        Self {
            out,
            start,
            quoted: false,
        }
    }

    /// Whether a character seen so far forced quoting.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Appends a chunk of the value.
    pub fn push_str(&mut self, chunk: &str) {
        if !self.quoted && !needs_quoting(chunk) {
            self.out.push_str(chunk);
            return;
        }
        for c in chunk.chars() {
            self.push_char(c);
        }
    }

    /// Appends one character of the value.
    pub fn push_char(&mut self, c: char) {
        let class = classify(c);
        if class != CharClass::Ordinary && !self.quoted {
            self.out.insert(self.start, '"');
            self.quoted = true;
        }

        match class {
            CharClass::Ordinary | CharClass::Whitespace => self.out.push(c),
            CharClass::Special => {
                self.out.push('\\');
                self.out.push(c);
            }
            CharClass::Control => self.push_control(c),
        }
    }

    fn push_control(&mut self, c: char) {
        let short = match c {
            '\n' => 'n',
            '\r' => 'r',
            '\t' => 't',
            '\u{8}' => 'b',
            '\u{c}' => 'f',
            _ => {
                let code = u32::from(c);
                self.out.push_str("\\u");
                for shift in [12, 8, 4, 0] {
                    self.out
                        .push(char::from(HEX_DIGITS[((code >> shift) & 0xf) as usize]));
                }
                return;
            }
        };
        self.out.push('\\');
        self.out.push(short);
    }

    /// Closes the value, appending the trailing quote when needed.
    ///
    /// Returns whether the value was quoted.
    pub fn finish(self) -> bool {
        if self.quoted {
            self.out.push('"');
        }
        self.quoted
    }
}

impl fmt::Write for Escaper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push_char(c);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_are_untouched() {
        assert_eq!(escape("room"), "room");
        assert_eq!(escape("25"), "25");
        assert_eq!(escape("-3.5e10"), "-3.5e10");
        assert_eq!(escape(""), "");
        assert_eq!(escape("Zürich"), "Zürich");
    }

    #[test]
    fn whitespace_is_kept_but_quoted() {
        assert_eq!(escape("living room"), "\"living room\"");
        assert_eq!(escape(" "), "\" \"");
        assert_eq!(escape("a\u{a0}b"), "\"a\u{a0}b\"");
    }

    #[test]
    fn no_break_spaces_and_nel_force_quoting() {
        for c in ['\u{85}', '\u{a0}', '\u{2007}', '\u{202f}', '\u{2028}', '\u{3000}'] {
            let value = format!("a{c}b");
            assert!(needs_quoting(&value), "{c:?}");
            assert_eq!(escape(&value), format!("\"{value}\""));
        }
    }

    #[test]
    fn named_controls_use_short_escapes() {
        assert_eq!(escape("a\nb"), r#""a\nb""#);
        assert_eq!(escape("a\rb"), r#""a\rb""#);
        assert_eq!(escape("a\tb"), r#""a\tb""#);
        assert_eq!(escape("a\u{8}b"), r#""a\bb""#);
        assert_eq!(escape("a\u{c}b"), r#""a\fb""#);
    }

    #[test]
    fn other_controls_use_unicode_escapes() {
        assert_eq!(escape("\u{0}"), r#""\u0000""#);
        assert_eq!(escape("bell\u{7}"), r#""bell\u0007""#);
        assert_eq!(escape("\u{b}"), r#""\u000b""#);
        assert_eq!(escape("\u{1b}[0m"), r#""\u001b[0m""#);
        assert_eq!(escape("\u{1f}"), r#""\u001f""#);
    }

    #[test]
    fn specials_are_backslash_escaped() {
        assert_eq!(escape("a\\b"), r#""a\\b""#);
        assert_eq!(escape("k=v"), r#""k\=v""#);
        assert_eq!(escape("it's"), r#""it\'s""#);
        assert_eq!(escape("say \"hi\""), r#""say \"hi\"""#);
    }

    #[test]
    fn quote_is_inserted_at_value_start_not_buffer_start() {
        let mut out = String::from("location=");
        let mut escaper = Escaper::new(&mut out);
        escaper.push_str("Floor 4");
        assert!(escaper.is_quoted());
        assert!(escaper.finish());
        assert_eq!(out, "location=\"Floor 4\"");
    }

    #[test]
    fn trigger_discovered_late_still_quotes_whole_value() {
        let mut out = String::new();
        let mut escaper = Escaper::new(&mut out);
        escaper.push_str("abcdef");
        escaper.push_str("gh\n");
        escaper.finish();
        assert_eq!(out, r#""abcdefgh\n""#);
    }

    #[test]
    fn display_values_are_streamed() {
        let mut out = String::from("x=");
        escape_display_into(&mut out, &format_args!("{} {}", 1, 2)).expect("format");
        assert_eq!(out, "x=\"1 2\"");
    }

    #[test]
    fn reference_sample_matches() {
        assert_eq!(
            escape("Floor 4,\toffice 45\n"),
            "\"Floor 4,\\toffice 45\\n\""
        );
    }

    #[test]
    fn needs_quoting_agrees_with_escape() {
        for sample in ["room", "a b", "x=y", "\u{1}", "ok_value-1"] {
            assert_eq!(needs_quoting(sample), escape(sample).starts_with('"'));
        }
    }
}
