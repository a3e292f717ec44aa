use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Wraps a parser so that parse and unread calls are traced through the
/// [`log`] facade under the given label. No behavioral change.
pub struct Logged {
    inner: BoxedParser,
    label: String,
}

impl Logged {
    pub fn new(inner: BoxedParser, label: impl Into<String>) -> Logged {
        Logged {
            inner,
            label: label.into(),
        }
    }
}

impl Parser for Logged {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        log::trace!("{}: parse", self.label);
        let result = self.inner.parse(src);
        match &result {
            Ok(val) => log::trace!("{}: parse ok: {:?}", self.label, val),
            Err(err) => log::trace!("{}: parse failed: {}", self.label, err),
        }
        result
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        log::trace!("{}: unread", self.label);
        self.inner.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Logged {
            inner: self.inner.clone_parser(),
            label: self.label.clone(),
        })
    }
}

/// Convenience function to trace a parser's calls under a label.
pub fn logged(parser: BoxedParser, label: impl Into<String>) -> BoxedParser {
    Box::new(Logged::new(parser, label))
}
