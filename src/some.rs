use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that matches a given parser zero or more times. Not matching at
/// all is not an error.
///
/// Each occurrence runs on a fresh clone of the prototype; the clones are
/// kept, in order, so unread can replay them in reverse. The trailing clone
/// that failed already restored its own bytes and stays a harmless no-op.
pub struct Some {
    prototype: BoxedParser,
    used: Vec<BoxedParser>,
}

impl Some {
    pub fn new(prototype: BoxedParser) -> Some {
        Some {
            prototype,
            used: Vec::new(),
        }
    }
}

impl Parser for Some {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let mut values = Vec::new();
        loop {
            let mut next = self.prototype.clone_parser();
            let result = next.parse(src);
            self.used.push(next);

            match result {
                Ok(val) => values.push(val),
                Err(_) => break,
            }
        }
        Ok(Value::Seq(values))
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        for parser in self.used.iter_mut().rev() {
            parser.unread(src);
        }
        self.used.clear();
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Some::new(self.prototype.clone_parser()))
    }
}

/// Convenience function to create a zero-or-more parser.
pub fn some(prototype: BoxedParser) -> BoxedParser {
    Box::new(Some::new(prototype))
}
