use crate::error::ParseError;
use crate::reader::Reader;
use crate::value::Value;

// # Parser objects and dynamic dispatch
//
// Every parser in this crate is used through `Box<dyn Parser>`. Combinators
// holding generic children would nest their types (`Seq<Or<Char, Char>,
// Many<..>>` and worse) with every level of grammar, which makes recursive
// grammars inexpressible and error types explode. Boxing flattens all of
// that to a single trait object per child: one allocation per node of the
// grammar, virtual dispatch per parse call, and any grammar stays
// representable.

/// The contract every parser in this framework provides.
///
/// A parser owns its configuration (expected rune, child parsers, predicate)
/// plus the execution state of its most recent parse. The state exists so a
/// parent combinator can undo a successful child when a later sibling fails.
pub trait Parser {
    /// Attempts a parse, reading from `src`.
    ///
    /// On success the result value is returned and the parser remembers
    /// enough to undo the read via [`unread`](Parser::unread). On failure
    /// every byte consumed during the attempt has already been unread: the
    /// reader is byte-for-byte in its pre-call state.
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError>;

    /// Puts the bytes of the preceding successful parse back into `src`.
    ///
    /// Called at most once per successful parse, by a parent that decided
    /// to undo it. After a failed (or never attempted) parse this is a
    /// no-op.
    fn unread(&mut self, src: &mut Reader<'_>);

    /// Creates a parser with the same configuration and no execution state,
    /// usable independently of `self`.
    fn clone_parser(&self) -> BoxedParser;
}

/// A type-erased parser; what every constructor in this crate returns.
pub type BoxedParser = Box<dyn Parser>;

impl Parser for BoxedParser {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        (**self).parse(src)
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        (**self).unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        (**self).clone_parser()
    }
}

impl Clone for BoxedParser {
    fn clone(&self) -> BoxedParser {
        self.clone_parser()
    }
}

/// Runs a parser directly on a string.
pub fn parse_str<P>(input: &str, parser: &mut P) -> Result<Value, ParseError>
where
    P: Parser + ?Sized,
{
    let mut reader = Reader::new(input.as_bytes());
    parser.parse(&mut reader)
}

/// Runs a parser on an arbitrary byte source.
pub fn parse_reader<R, P>(src: R, parser: &mut P) -> Result<Value, ParseError>
where
    R: std::io::Read,
    P: Parser + ?Sized,
{
    let mut reader = Reader::new(src);
    parser.parse(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::seq::seq;

    #[test]
    fn test_parse_str() {
        let mut parser = is_char('x');
        let val = parse_str("xy", &mut parser).unwrap();
        assert_eq!(val, Value::Rune('x'));
    }

    #[test]
    fn test_parse_reader() {
        let mut parser = seq(vec![is_char('o'), is_char('k')]);
        let val = parse_reader("ok".as_bytes(), &mut parser).unwrap();
        assert_eq!(val, Value::Seq(vec![Value::Rune('o'), Value::Rune('k')]));
    }

    #[test]
    fn test_boxed_parser_clones_independently() {
        let parser = is_char('a');
        let mut clone = parser.clone();

        let val = parse_str("a", &mut clone).unwrap();
        assert_eq!(val, Value::Rune('a'));
    }
}
