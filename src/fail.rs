use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Parser that always fails with a given error and consumes no input.
///
/// Useful as a placeholder branch or to turn a grammar position into a
/// guaranteed diagnostic.
pub struct Fail {
    error: ParseError,
}

impl Fail {
    pub fn new(error: ParseError) -> Fail {
        Fail { error }
    }
}

impl Parser for Fail {
    fn parse(&mut self, _src: &mut Reader<'_>) -> Result<Value, ParseError> {
        Err(self.error.clone())
    }

    fn unread(&mut self, _src: &mut Reader<'_>) {}

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Fail::new(self.error.clone()))
    }
}

/// Convenience function to create an always-failing parser.
pub fn fail(error: ParseError) -> BoxedParser {
    Box::new(Fail::new(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_always_fails_with_given_error() {
        let mut parser = fail(ParseError::User("nope".into()));
        match parse_str("anything", &mut parser) {
            Err(ParseError::User(msg)) => assert_eq!(msg, "nope"),
            other => panic!("expected User error, got {:?}", other),
        }
    }

    #[test]
    fn test_consumes_no_input() {
        let mut reader = Reader::new("ab".as_bytes());
        let mut parser = fail(ParseError::User("nope".into()));
        assert!(parser.parse(&mut reader).is_err());
        parser.unread(&mut reader);

        let mut out = [0u8; 2];
        assert_eq!(reader.read(&mut out).unwrap(), 2);
        assert_eq!(&out, b"ab");
    }
}
