use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that reads exactly one byte from the source.
pub struct AnyByte {
    buf: [u8; 1],
    read: bool,
}

impl AnyByte {
    pub fn new() -> AnyByte {
        AnyByte {
            buf: [0],
            read: false,
        }
    }

    /// Typed variant of parse used by wrapping parsers.
    pub(crate) fn read_byte(&mut self, src: &mut Reader<'_>) -> Result<u8, ParseError> {
        src.read(&mut self.buf)?;
        self.read = true;
        Ok(self.buf[0])
    }
}

impl Default for AnyByte {
    fn default() -> AnyByte {
        AnyByte::new()
    }
}

impl Parser for AnyByte {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        self.read_byte(src).map(Value::Byte)
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if self.read {
            src.unread(&self.buf);
            self.read = false;
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(AnyByte::new())
    }
}

/// Convenience function to create an AnyByte parser.
pub fn any_byte() -> BoxedParser {
    Box::new(AnyByte::new())
}
