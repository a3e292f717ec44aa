use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;
use std::sync::Arc;

/// Parser that defers construction of the actual parser to parse time.
///
/// Each parse call invokes the factory for a fresh parser and delegates to
/// it; the produced parser is retained so unread can reach it. Grammars can
/// refer to themselves through the factory without building an infinite
/// parser tree.
pub struct Recursive {
    factory: Arc<dyn Fn() -> BoxedParser>,
    produced: Option<BoxedParser>,
}

impl Recursive {
    pub fn new<F>(factory: F) -> Recursive
    where
        F: Fn() -> BoxedParser + 'static,
    {
        Recursive {
            factory: Arc::new(factory),
            produced: None,
        }
    }
}

impl Parser for Recursive {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let mut parser = (self.factory)();
        let result = parser.parse(src);
        self.produced = Some(parser);
        result
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if let Some(mut parser) = self.produced.take() {
            parser.unread(src);
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Recursive {
            factory: Arc::clone(&self.factory),
            produced: None,
        })
    }
}

/// Convenience function to create a factory-backed recursion point.
pub fn recursive<F>(factory: F) -> BoxedParser
where
    F: Fn() -> BoxedParser + 'static,
{
    Box::new(Recursive::new(factory))
}
