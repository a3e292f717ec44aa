use crate::any_byte::AnyByte;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that reads a single known byte. A different byte is a parsing
/// error and the byte is returned to the reader.
pub struct IsByte {
    expected: u8,
    inner: AnyByte,
}

impl IsByte {
    pub fn new(expected: u8) -> IsByte {
        IsByte {
            expected,
            inner: AnyByte::new(),
        }
    }
}

impl Parser for IsByte {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let actual = self.inner.read_byte(src)?;

        if actual == self.expected {
            return Ok(Value::Byte(actual));
        }

        self.inner.unread(src);
        Err(ParseError::ByteMismatch {
            expected: self.expected,
            actual,
        })
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.inner.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(IsByte::new(self.expected))
    }
}

/// Convenience function to create a parser matching a specific byte.
pub fn is_byte(expected: u8) -> BoxedParser {
    Box::new(IsByte::new(expected))
}
