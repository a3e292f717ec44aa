use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that matches the first of a given set of parsers. A later parser
/// is not tried once an earlier one matched.
///
/// When every child fails, the last child's error is returned verbatim;
/// nothing is recorded as selected and unread does nothing, which is
/// correct because every child restored its own bytes.
pub struct Or {
    parsers: Vec<BoxedParser>,
    selected: Option<usize>,
}

impl Or {
    pub fn new(parsers: Vec<BoxedParser>) -> Or {
        Or {
            parsers,
            selected: None,
        }
    }
}

impl Parser for Or {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let mut last_err = None;
        for i in 0..self.parsers.len() {
            match self.parsers[i].parse(src) {
                Ok(val) => {
                    self.selected = Some(i);
                    return Ok(val);
                }
                Err(err) => last_err = Some(err),
            }
        }

        match last_err {
            Some(err) => Err(err),
            // No alternatives at all: succeed without a value.
            None => Ok(Value::Unit),
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if let Some(i) = self.selected.take() {
            self.parsers[i].unread(src);
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Or::new(
            self.parsers.iter().map(|p| p.clone_parser()).collect(),
        ))
    }
}

/// Convenience function to create an alternation parser.
pub fn or(parsers: Vec<BoxedParser>) -> BoxedParser {
    Box::new(Or::new(parsers))
}
