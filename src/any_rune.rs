use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that reads a single valid UTF-8 code point.
///
/// Bytes are pulled one at a time until they form a complete rune or are
/// provably not UTF-8. Invalid sequences (bad start byte, bad continuation,
/// overlong form, surrogate, beyond U+10FFFF) unread everything consumed
/// and fail with [`ParseError::RuneExpected`]. An encoded replacement
/// character U+FFFD is rejected the same way. End of input before the first
/// byte propagates verbatim; partway through a sequence, the partial bytes
/// are unread first.
pub struct AnyRune {
    buf: [u8; 4],
    len: usize,
}

impl AnyRune {
    pub fn new() -> AnyRune {
        AnyRune { buf: [0; 4], len: 0 }
    }

    /// Typed variant of parse used by wrapping parsers.
    pub(crate) fn read_rune(&mut self, src: &mut Reader<'_>) -> Result<char, ParseError> {
        self.len = 0;

        src.read(&mut self.buf[0..1])?;
        self.len = 1;
        let b0 = self.buf[0];

        if b0 < 0x80 {
            return Ok(b0 as char);
        }

        let width = match sequence_width(b0) {
            Some(width) => width,
            None => return Err(self.fail_invalid(src)),
        };

        for i in 1..width {
            if let Err(err) = src.read(&mut self.buf[i..i + 1]) {
                self.unread_consumed(src);
                return Err(err);
            }
            self.len = i + 1;

            if !continuation_ok(b0, i, self.buf[i]) {
                return Err(self.fail_invalid(src));
            }
        }

        let rune = decode(&self.buf[..width]);
        match char::from_u32(rune) {
            Some(c) if c != '\u{fffd}' => Ok(c),
            _ => Err(self.fail_invalid(src)),
        }
    }

    fn fail_invalid(&mut self, src: &mut Reader<'_>) -> ParseError {
        self.unread_consumed(src);
        ParseError::RuneExpected
    }

    fn unread_consumed(&mut self, src: &mut Reader<'_>) {
        if self.len > 0 {
            src.unread(&self.buf[..self.len]);
            self.len = 0;
        }
    }
}

impl Default for AnyRune {
    fn default() -> AnyRune {
        AnyRune::new()
    }
}

impl Parser for AnyRune {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        self.read_rune(src).map(Value::Rune)
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.unread_consumed(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(AnyRune::new())
    }
}

/// Convenience function to create an AnyRune parser.
pub fn any_rune() -> BoxedParser {
    Box::new(AnyRune::new())
}

/// Expected sequence length for a non-ASCII start byte, or None if the byte
/// cannot start a sequence (continuation bytes, overlong C0/C1, above F4).
fn sequence_width(b0: u8) -> Option<usize> {
    match b0 {
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

/// Whether `byte` is a valid continuation at position `i` of a sequence
/// starting with `b0`. The second byte carries tightened ranges that rule
/// out overlong forms, surrogates and values beyond U+10FFFF.
fn continuation_ok(b0: u8, i: usize, byte: u8) -> bool {
    if i == 1 {
        match b0 {
            0xe0 => (0xa0..=0xbf).contains(&byte),
            0xed => (0x80..=0x9f).contains(&byte),
            0xf0 => (0x90..=0xbf).contains(&byte),
            0xf4 => (0x80..=0x8f).contains(&byte),
            _ => (0x80..=0xbf).contains(&byte),
        }
    } else {
        (0x80..=0xbf).contains(&byte)
    }
}

fn decode(bytes: &[u8]) -> u32 {
    match bytes.len() {
        2 => ((bytes[0] as u32 & 0x1f) << 6) | (bytes[1] as u32 & 0x3f),
        3 => {
            ((bytes[0] as u32 & 0x0f) << 12)
                | ((bytes[1] as u32 & 0x3f) << 6)
                | (bytes[2] as u32 & 0x3f)
        }
        _ => {
            ((bytes[0] as u32 & 0x07) << 18)
                | ((bytes[1] as u32 & 0x3f) << 12)
                | ((bytes[2] as u32 & 0x3f) << 6)
                | (bytes[3] as u32 & 0x3f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining(reader: &mut Reader<'_>) -> Vec<u8> {
        let mut collected = Vec::new();
        let mut out = [0u8; 1];
        while reader.read(&mut out).is_ok() {
            collected.push(out[0]);
        }
        collected
    }

    #[test]
    fn test_ascii_rune() {
        let mut reader = Reader::new("a".as_bytes());
        let mut parser = any_rune();
        assert_eq!(parser.parse(&mut reader).unwrap(), Value::Rune('a'));
    }

    #[test]
    fn test_multibyte_runes() {
        let mut reader = Reader::new("é€🦀".as_bytes());
        for expected in ['é', '€', '🦀'] {
            let mut parser = any_rune();
            assert_eq!(parser.parse(&mut reader).unwrap(), Value::Rune(expected));
        }
    }

    #[test]
    fn test_eof_on_empty_input() {
        let mut reader = Reader::new("".as_bytes());
        let mut parser = any_rune();
        assert!(matches!(
            parser.parse(&mut reader),
            Err(ParseError::EndOfInput)
        ));
    }

    #[test]
    fn test_eof_mid_sequence_unreads_partial_bytes() {
        // First two bytes of '€' (0xe2 0x82 0xac) with the last one missing.
        let data = [0xe2, 0x82];
        let mut reader = Reader::new(&data[..]);
        let mut parser = any_rune();

        assert!(matches!(
            parser.parse(&mut reader),
            Err(ParseError::EndOfInput)
        ));
        assert_eq!(remaining(&mut reader), vec![0xe2, 0x82]);
    }

    #[test]
    fn test_invalid_start_byte_restored() {
        let data = [0xff, b'a'];
        let mut reader = Reader::new(&data[..]);
        let mut parser = any_rune();

        assert!(matches!(
            parser.parse(&mut reader),
            Err(ParseError::RuneExpected)
        ));
        assert_eq!(remaining(&mut reader), vec![0xff, b'a']);
    }

    #[test]
    fn test_invalid_continuation_restored() {
        // 0xc3 expects a continuation byte; '(' is not one.
        let data = [0xc3, b'('];
        let mut reader = Reader::new(&data[..]);
        let mut parser = any_rune();

        assert!(matches!(
            parser.parse(&mut reader),
            Err(ParseError::RuneExpected)
        ));
        assert_eq!(remaining(&mut reader), vec![0xc3, b'(']);
    }

    #[test]
    fn test_overlong_and_surrogate_rejected() {
        // Overlong NUL (0xc0 0x80) and an encoded UTF-16 surrogate.
        for data in [&[0xc0u8, 0x80][..], &[0xed, 0xa0, 0x80][..]] {
            let mut reader = Reader::new(data);
            let mut parser = any_rune();
            assert!(matches!(
                parser.parse(&mut reader),
                Err(ParseError::RuneExpected)
            ));
            assert_eq!(remaining(&mut reader), data.to_vec());
        }
    }

    #[test]
    fn test_encoded_replacement_char_rejected() {
        let data = "\u{fffd}x".as_bytes();
        let mut reader = Reader::new(data);
        let mut parser = any_rune();

        assert!(matches!(
            parser.parse(&mut reader),
            Err(ParseError::RuneExpected)
        ));
        assert_eq!(remaining(&mut reader), data.to_vec());
    }

    #[test]
    fn test_beyond_unicode_range_rejected() {
        let data = [0xf5, 0x80, 0x80, 0x80];
        let mut reader = Reader::new(&data[..]);
        let mut parser = any_rune();

        assert!(matches!(
            parser.parse(&mut reader),
            Err(ParseError::RuneExpected)
        ));
        assert_eq!(remaining(&mut reader), data.to_vec());
    }

    #[test]
    fn test_unread_after_success_restores_bytes() {
        let mut reader = Reader::new("€z".as_bytes());
        let mut parser = any_rune();

        assert_eq!(parser.parse(&mut reader).unwrap(), Value::Rune('€'));
        parser.unread(&mut reader);
        assert_eq!(remaining(&mut reader), "€z".as_bytes().to_vec());
    }

    #[test]
    fn test_edge_codepoints() {
        for (text, expected) in [
            ("\u{80}", '\u{80}'),
            ("\u{7ff}", '\u{7ff}'),
            ("\u{800}", '\u{800}'),
            ("\u{ffff}", '\u{ffff}'),
            ("\u{10000}", '\u{10000}'),
            ("\u{10ffff}", '\u{10ffff}'),
        ] {
            let mut reader = Reader::new(text.as_bytes());
            let mut parser = any_rune();
            assert_eq!(parser.parse(&mut reader).unwrap(), Value::Rune(expected));
        }
    }
}
