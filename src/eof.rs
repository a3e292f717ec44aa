use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that succeeds, without a value, if and only if the source reached
/// end of input. A byte that was read during the probe is put back.
pub struct Eof;

impl Parser for Eof {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let mut buf = [0u8; 1];
        match src.read(&mut buf) {
            Err(ParseError::EndOfInput) => Ok(Value::Unit),
            Err(err) => Err(ParseError::ExpectedEof {
                cause: Box::new(err),
            }),
            Ok(_) => {
                src.unread(&buf);
                Err(ParseError::ExpectedEof {
                    cause: Box::new(ParseError::FoundByte { actual: buf[0] }),
                })
            }
        }
    }

    fn unread(&mut self, _src: &mut Reader<'_>) {}

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Eof)
    }
}

/// Convenience function to create an EOF parser.
pub fn eof() -> BoxedParser {
    Box::new(Eof)
}
