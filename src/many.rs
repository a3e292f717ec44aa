use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::seq::seq;
use crate::some::some;
use crate::value::Value;

/// Parser that matches a given parser one or more times. Not matching at
/// all is an error.
///
/// Built as the sequence of one occurrence followed by zero-or-more, with
/// the two-level result spliced into one flat sequence.
pub struct Many {
    inner: BoxedParser,
}

impl Many {
    pub fn new(prototype: BoxedParser) -> Many {
        let first = prototype.clone_parser();
        Many {
            inner: seq(vec![first, some(prototype)]),
        }
    }
}

impl Parser for Many {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let val = self.inner.parse(src)?;

        match val {
            Value::Seq(mut vals) => {
                // Inner shape is [first, Seq(rest)]; flatten it.
                let rest = vals.pop();
                let first = vals.pop();
                let mut values = Vec::new();
                if let Some(first) = first {
                    values.push(first);
                }
                if let Some(Value::Seq(rest)) = rest {
                    values.extend(rest);
                }
                Ok(Value::Seq(values))
            }
            other => Ok(other),
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.inner.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Many {
            inner: self.inner.clone_parser(),
        })
    }
}

/// Convenience function to create a one-or-more parser.
pub fn many(prototype: BoxedParser) -> BoxedParser {
    Box::new(Many::new(prototype))
}
