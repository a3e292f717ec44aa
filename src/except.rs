use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that wraps another parser so that it fails whenever a third,
/// excepted parser would succeed.
///
/// The excepted parser runs first as a lookahead; a success is undone
/// immediately and reported as [`ParseError::ExceptionMatched`].
pub struct Except {
    inner: BoxedParser,
    except: BoxedParser,
}

impl Except {
    pub fn new(inner: BoxedParser, except: BoxedParser) -> Except {
        Except { inner, except }
    }
}

impl Parser for Except {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        if self.except.parse(src).is_ok() {
            self.except.unread(src);
            return Err(ParseError::ExceptionMatched);
        }
        self.inner.parse(src)
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.inner.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Except::new(
            self.inner.clone_parser(),
            self.except.clone_parser(),
        ))
    }
}

/// Convenience function to create an exception-guarded parser.
pub fn except(inner: BoxedParser, excepted: BoxedParser) -> BoxedParser {
    Box::new(Except::new(inner, excepted))
}
