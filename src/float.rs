use crate::any_rune::AnyRune;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;
use std::str::FromStr;

/// Parser for a double-precision float: an optional leading `-`, digits, an
/// optional single `.`, and more digits. No exponent notation.
///
/// Lexing stops at the first rune that would violate that shape, leaving it
/// in the stream. Text that lexed but does not convert (`-`, `-.`, `.`)
/// fails with [`ParseError::FloatError`] and everything is unread.
pub struct Float {
    consumed: Vec<u8>,
}

impl Float {
    pub fn new() -> Float {
        Float {
            consumed: Vec::new(),
        }
    }

    fn lex(&mut self, src: &mut Reader<'_>) -> Result<String, ParseError> {
        self.consumed.clear();
        let mut text = String::new();
        let mut seen_dot = false;
        let mut rune_reader = AnyRune::new();

        loop {
            let rune = match rune_reader.read_rune(src) {
                Ok(rune) => rune,
                Err(err) => {
                    if text.is_empty() {
                        return Err(err);
                    }
                    break;
                }
            };

            let acceptable = rune.is_numeric()
                || (rune == '-' && text.is_empty())
                || (rune == '.' && !seen_dot && !text.is_empty());
            if !acceptable {
                rune_reader.unread(src);
                if text.is_empty() {
                    return Err(ParseError::RunePredicateFailed { actual: rune });
                }
                break;
            }

            if rune == '.' {
                seen_dot = true;
            }
            text.push(rune);
            let mut encoded = [0u8; 4];
            self.consumed
                .extend_from_slice(rune.encode_utf8(&mut encoded).as_bytes());
        }

        Ok(text)
    }

    fn unread_consumed(&mut self, src: &mut Reader<'_>) {
        if !self.consumed.is_empty() {
            src.unread(&self.consumed);
            self.consumed.clear();
        }
    }
}

impl Default for Float {
    fn default() -> Float {
        Float::new()
    }
}

impl Parser for Float {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let text = match self.lex(src) {
            Ok(text) => text,
            Err(err) => {
                return Err(ParseError::FloatError {
                    cause: Box::new(err),
                })
            }
        };

        match f64::from_str(&text) {
            Ok(value) => Ok(Value::Float(value)),
            Err(_) => {
                self.unread_consumed(src);
                Err(ParseError::FloatError {
                    cause: Box::new(ParseError::User(format!(
                        "cannot convert {:?} to a float",
                        text
                    ))),
                })
            }
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.unread_consumed(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Float::new())
    }
}

/// Convenience function to create a float parser.
pub fn float() -> BoxedParser {
    Box::new(Float::new())
}
