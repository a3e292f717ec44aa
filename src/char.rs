use crate::any_rune::AnyRune;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;
use std::sync::Arc;

/// Parser that reads a single known rune. A different rune is a parsing
/// error.
pub struct IsChar {
    expected: char,
    inner: AnyRune,
}

impl IsChar {
    pub fn new(expected: char) -> IsChar {
        IsChar {
            expected,
            inner: AnyRune::new(),
        }
    }
}

impl Parser for IsChar {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let actual = match self.inner.read_rune(src) {
            Ok(rune) => rune,
            Err(err) => {
                return Err(ParseError::RuneMismatchNoRune {
                    expected: self.expected,
                    cause: Box::new(err),
                })
            }
        };

        if actual == self.expected {
            return Ok(Value::Rune(actual));
        }

        self.inner.unread(src);
        Err(ParseError::RuneMismatch {
            expected: self.expected,
            actual,
        })
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.inner.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(IsChar::new(self.expected))
    }
}

/// Convenience function to create a parser matching a specific rune.
pub fn is_char(expected: char) -> BoxedParser {
    Box::new(IsChar::new(expected))
}

/// Parser that reads a single rune as long as it fulfills a predicate.
pub struct CharIf {
    pred: Arc<dyn Fn(char) -> bool>,
    inner: AnyRune,
}

impl CharIf {
    pub fn new<F>(pred: F) -> CharIf
    where
        F: Fn(char) -> bool + 'static,
    {
        CharIf {
            pred: Arc::new(pred),
            inner: AnyRune::new(),
        }
    }
}

impl Parser for CharIf {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let actual = match self.inner.read_rune(src) {
            Ok(rune) => rune,
            Err(err) => {
                return Err(ParseError::RunePredicateNoRune {
                    cause: Box::new(err),
                })
            }
        };

        if (self.pred)(actual) {
            return Ok(Value::Rune(actual));
        }

        self.inner.unread(src);
        Err(ParseError::RunePredicateFailed { actual })
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.inner.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(CharIf {
            pred: Arc::clone(&self.pred),
            inner: AnyRune::new(),
        })
    }
}

/// Convenience function to create a parser matching runes by predicate.
pub fn char_if<F>(pred: F) -> BoxedParser
where
    F: Fn(char) -> bool + 'static,
{
    Box::new(CharIf::new(pred))
}
