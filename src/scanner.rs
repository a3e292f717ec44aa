use crate::eof::eof;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Convenient interface to use a single parser multiple times on the same
/// reader.
///
/// Each call to [`scan`](Scanner::scan) parses one record with a fresh
/// clone of the parser and makes it available through
/// [`result`](Scanner::result). The scanner stops at the first error; a
/// clean end of input is not reported as an error.
pub struct Scanner<'a> {
    src: Reader<'a>,
    parser: BoxedParser,
    val: Option<Value>,
    err: Option<ParseError>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner from a reader and a parser blueprint.
    pub fn new(src: Reader<'a>, parser: BoxedParser) -> Scanner<'a> {
        Scanner {
            src,
            parser,
            val: None,
            err: None,
        }
    }

    /// Parses the next record. Returns true when a value is available.
    pub fn scan(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }

        if eof().parse(&mut self.src).is_ok() {
            self.val = None;
            self.err = Some(ParseError::EndOfInput);
            return false;
        }

        let mut parser = self.parser.clone_parser();
        match parser.parse(&mut self.src) {
            Ok(val) => {
                self.val = Some(val);
                true
            }
            Err(err) => {
                self.val = None;
                self.err = Some(err);
                false
            }
        }
    }

    /// The most recently parsed value.
    pub fn result(&self) -> Option<&Value> {
        self.val.as_ref()
    }

    /// The error that stopped the scanner, if it was not a clean end of
    /// input.
    pub fn err(&self) -> Option<&ParseError> {
        match &self.err {
            Some(ParseError::EndOfInput) => None,
            other => other.as_ref(),
        }
    }
}
