use crate::any_rune::any_rune;
use crate::discard::{discard_left, discard_right};
use crate::error::ParseError;
use crate::except::except;
use crate::join::join_string;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::some::some;
use crate::value::Value;

/// Parser for a single known string. A different string is a parsing error.
pub struct IsString {
    expected: String,
    case_insensitive: bool,
    buf: Option<Vec<u8>>,
}

impl IsString {
    pub fn new(expected: impl Into<String>) -> IsString {
        IsString {
            expected: expected.into(),
            case_insensitive: false,
            buf: None,
        }
    }

    pub fn new_ci(expected: impl Into<String>) -> IsString {
        IsString {
            expected: expected.into(),
            case_insensitive: true,
            buf: None,
        }
    }

    fn matches(&self, actual: &[u8]) -> bool {
        if self.case_insensitive {
            actual.eq_ignore_ascii_case(self.expected.as_bytes())
        } else {
            actual == self.expected.as_bytes()
        }
    }
}

impl Parser for IsString {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let mut buf = vec![0u8; self.expected.len()];
        let mut n = 0;
        while n < buf.len() {
            match src.read(&mut buf[n..]) {
                Ok(m) => n += m,
                Err(err) => {
                    src.unread(&buf[..n]);
                    return Err(ParseError::StringError {
                        expected: self.expected.clone(),
                        cause: Box::new(err),
                    });
                }
            }
        }

        if !self.matches(&buf) {
            src.unread(&buf);
            return Err(ParseError::StringMismatch {
                expected: self.expected.clone(),
                actual: String::from_utf8_lossy(&buf).into_owned(),
            });
        }

        // Case-sensitive matching returns the expected string; the
        // case-insensitive variant returns what was actually read.
        let result = if self.case_insensitive {
            String::from_utf8_lossy(&buf).into_owned()
        } else {
            self.expected.clone()
        };
        self.buf = Some(buf);
        Ok(Value::Str(result))
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if let Some(buf) = self.buf.take() {
            src.unread(&buf);
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(IsString {
            expected: self.expected.clone(),
            case_insensitive: self.case_insensitive,
            buf: None,
        })
    }
}

/// Convenience function to create a parser matching an exact string.
pub fn is_string(expected: impl Into<String>) -> BoxedParser {
    Box::new(IsString::new(expected))
}

/// Convenience function to create a parser matching a string with ASCII
/// case folding. Returns the string as it appeared in the input.
pub fn is_string_ci(expected: impl Into<String>) -> BoxedParser {
    Box::new(IsString::new_ci(expected))
}

/// Parser for a string between two delimiter strings, returning the value
/// between them.
pub fn delimited_string(
    begin_delimiter: impl Into<String>,
    end_delimiter: impl Into<String>,
) -> BoxedParser {
    let end = end_delimiter.into();
    join_string(discard_left(
        is_string(begin_delimiter),
        discard_right(
            some(except(any_rune(), is_string(end.clone()))),
            is_string(end),
        ),
    ))
}
