use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;
use std::sync::Arc;

/// Wraps a parser so that a successful result is mapped through a function.
/// A function error counts as a parse failure and unreads the inner parser.
pub struct Transformer {
    inner: BoxedParser,
    func: Arc<dyn Fn(Value) -> Result<Value, ParseError>>,
    read: bool,
}

impl Parser for Transformer {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let val = self.inner.parse(src)?;

        match (self.func)(val) {
            Ok(val) => {
                self.read = true;
                Ok(val)
            }
            Err(err) => {
                self.inner.unread(src);
                Err(err)
            }
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if self.read {
            self.inner.unread(src);
            self.read = false;
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Transformer {
            inner: self.inner.clone_parser(),
            func: Arc::clone(&self.func),
            read: false,
        })
    }
}

/// Convenience function to map a parser's result.
pub fn transform<F>(parser: BoxedParser, func: F) -> BoxedParser
where
    F: Fn(Value) -> Result<Value, ParseError> + 'static,
{
    Box::new(Transformer {
        inner: parser,
        func: Arc::new(func),
        read: false,
    })
}

/// Wraps a parser so that a failure is mapped through a function, which may
/// replace the error or recover into a value. Successes pass through
/// unchanged.
pub struct ErrorTransformer {
    inner: BoxedParser,
    func: Arc<dyn Fn(ParseError) -> Result<Value, ParseError>>,
    read: bool,
}

impl Parser for ErrorTransformer {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        match self.inner.parse(src) {
            Ok(val) => {
                self.read = true;
                Ok(val)
            }
            Err(err) => (self.func)(err),
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if self.read {
            self.inner.unread(src);
            self.read = false;
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(ErrorTransformer {
            inner: self.inner.clone_parser(),
            func: Arc::clone(&self.func),
            read: false,
        })
    }
}

/// Convenience function to map a parser's error.
pub fn transform_err<F>(parser: BoxedParser, func: F) -> BoxedParser
where
    F: Fn(ParseError) -> Result<Value, ParseError> + 'static,
{
    Box::new(ErrorTransformer {
        inner: parser,
        func: Arc::new(func),
        read: false,
    })
}
