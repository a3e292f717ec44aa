use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that reads at most one result of a given parser. A failure is
/// discarded and reported as success without a value.
pub struct Optional {
    inner: BoxedParser,
    read: bool,
}

impl Optional {
    pub fn new(inner: BoxedParser) -> Optional {
        Optional { inner, read: false }
    }
}

impl Parser for Optional {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        match self.inner.parse(src) {
            Ok(val) => {
                self.read = true;
                Ok(val)
            }
            Err(_) => Ok(Value::Unit),
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if self.read {
            self.inner.unread(src);
            self.read = false;
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Optional::new(self.inner.clone_parser()))
    }
}

/// Convenience function to create an optional parser.
pub fn optional(inner: BoxedParser) -> BoxedParser {
    Box::new(Optional::new(inner))
}
