use crate::char::char_if;
use crate::discard::{discard_left, discard_right};
use crate::parser::BoxedParser;
use crate::some::some;

/// Wraps a parser so that leading whitespace is removed.
pub fn swallow_leading_whitespace(parser: BoxedParser) -> BoxedParser {
    discard_left(some(char_if(char::is_whitespace)), parser)
}

/// Wraps a parser so that trailing whitespace is removed.
pub fn swallow_trailing_whitespace(parser: BoxedParser) -> BoxedParser {
    discard_right(parser, some(char_if(char::is_whitespace)))
}

/// Wraps a parser so that leading and trailing whitespace is removed.
pub fn swallow_whitespace(parser: BoxedParser) -> BoxedParser {
    swallow_leading_whitespace(swallow_trailing_whitespace(parser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::int;
    use crate::parser::{parse_str, Parser};
    use crate::reader::Reader;
    use crate::value::Value;

    #[test]
    fn test_leading_whitespace_swallowed() {
        let mut parser = swallow_leading_whitespace(int());
        assert_eq!(parse_str("  \t42", &mut parser).unwrap(), Value::Int(42));
    }

    #[test]
    fn test_trailing_whitespace_swallowed() {
        let mut reader = Reader::new("42  x".as_bytes());
        let mut parser = swallow_trailing_whitespace(int());

        assert_eq!(parser.parse(&mut reader).unwrap(), Value::Int(42));

        let mut out = [0u8; 1];
        reader.read(&mut out).unwrap();
        assert_eq!(out[0], b'x');
    }

    #[test]
    fn test_both_sides_swallowed() {
        let mut parser = swallow_whitespace(int());
        assert_eq!(parse_str(" 7 ", &mut parser).unwrap(), Value::Int(7));
    }

    #[test]
    fn test_no_whitespace_needed() {
        let mut parser = swallow_whitespace(int());
        assert_eq!(parse_str("7", &mut parser).unwrap(), Value::Int(7));
    }

    #[test]
    fn test_unicode_whitespace() {
        let mut parser = swallow_leading_whitespace(int());
        assert_eq!(
            parse_str("\u{2009}3", &mut parser).unwrap(),
            Value::Int(3)
        );
    }
}
