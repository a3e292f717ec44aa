use crate::any_rune::AnyRune;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;
use num_bigint::BigInt;
use std::str::FromStr;

/// Lexes the textual shape shared by the integer parsers: an optional
/// leading `-` followed by one or more digits.
///
/// The `-` is only accepted while nothing has been accumulated, so a parser
/// that stops at a stray `-` leaves it for the next parser to consume. The
/// lexed text is remembered for byte-exact unread.
pub(crate) struct IntegralString {
    consumed: Vec<u8>,
}

impl IntegralString {
    pub(crate) fn new() -> IntegralString {
        IntegralString {
            consumed: Vec::new(),
        }
    }

    /// Returns the lexed text, or the error that stopped the first rune.
    pub(crate) fn lex(&mut self, src: &mut Reader<'_>) -> Result<String, ParseError> {
        self.consumed.clear();
        let mut text = String::new();
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

            let acceptable = rune.is_numeric() || (rune == '-' && text.is_empty());
            if !acceptable {
                rune_reader.unread(src);
                if text.is_empty() {
                    return Err(ParseError::RunePredicateFailed { actual: rune });
                }
                break;
            }

            text.push(rune);
            let mut encoded = [0u8; 4];
            self.consumed
                .extend_from_slice(rune.encode_utf8(&mut encoded).as_bytes());
        }

        Ok(text)
    }

    pub(crate) fn unread(&mut self, src: &mut Reader<'_>) {
        if !self.consumed.is_empty() {
            src.unread(&self.consumed);
            self.consumed.clear();
        }
    }
}

/// Parser for a machine-width signed integer in base 10.
pub struct Int {
    lexer: IntegralString,
}

impl Int {
    pub fn new() -> Int {
        Int {
            lexer: IntegralString::new(),
        }
    }
}

impl Default for Int {
    fn default() -> Int {
        Int::new()
    }
}

impl Parser for Int {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let text = match self.lexer.lex(src) {
            Ok(text) => text,
            Err(err) => {
                return Err(ParseError::IntegerError {
                    cause: Box::new(err),
                })
            }
        };

        match i64::from_str(&text) {
            Ok(value) => Ok(Value::Int(value)),
            Err(_) => {
                self.lexer.unread(src);
                Err(ParseError::IntegerError {
                    cause: Box::new(ParseError::IntegerConversion { actual: text }),
                })
            }
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.lexer.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Int::new())
    }
}

/// Convenience function to create a machine-width integer parser.
pub fn int() -> BoxedParser {
    Box::new(Int::new())
}

/// Parser for an arbitrary-precision integer in base 10.
pub struct BigIntParser {
    lexer: IntegralString,
}

impl BigIntParser {
    pub fn new() -> BigIntParser {
        BigIntParser {
            lexer: IntegralString::new(),
        }
    }
}

impl Default for BigIntParser {
    fn default() -> BigIntParser {
        BigIntParser::new()
    }
}

impl Parser for BigIntParser {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let text = match self.lexer.lex(src) {
            Ok(text) => text,
            Err(err) => {
                return Err(ParseError::IntegerError {
                    cause: Box::new(err),
                })
            }
        };

        match BigInt::from_str(&text) {
            Ok(value) => Ok(Value::BigInt(value)),
            Err(_) => {
                self.lexer.unread(src);
                Err(ParseError::IntegerConversion { actual: text })
            }
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.lexer.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(BigIntParser::new())
    }
}

/// Convenience function to create an arbitrary-precision integer parser.
pub fn big_int() -> BoxedParser {
    Box::new(BigIntParser::new())
}
