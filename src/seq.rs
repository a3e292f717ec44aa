use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::transform::transform;
use crate::value::Value;

/// Parser that matches all of its children in order, or none of them.
///
/// When the child at index `i` fails, children `0..i` are unread in reverse
/// order and the failure is reported as [`ParseError::SeqError`] carrying
/// `i` and the child's error.
pub struct Seq {
    parsers: Vec<BoxedParser>,
}

impl Seq {
    pub fn new(parsers: Vec<BoxedParser>) -> Seq {
        Seq { parsers }
    }
}

impl Parser for Seq {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let mut values = Vec::with_capacity(self.parsers.len());
        for i in 0..self.parsers.len() {
            match self.parsers[i].parse(src) {
                Ok(val) => values.push(val),
                Err(err) => {
                    for j in (0..i).rev() {
                        self.parsers[j].unread(src);
                    }
                    return Err(ParseError::SeqError {
                        index: i,
                        cause: Box::new(err),
                    });
                }
            }
        }
        Ok(Value::Seq(values))
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        for parser in self.parsers.iter_mut().rev() {
            parser.unread(src);
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Seq::new(
            self.parsers.iter().map(|p| p.clone_parser()).collect(),
        ))
    }
}

/// Convenience function to create a sequence parser.
pub fn seq(parsers: Vec<BoxedParser>) -> BoxedParser {
    Box::new(Seq::new(parsers))
}

/// Sequence whose result splices child sequences one level into the
/// enclosing sequence; non-sequence child values are appended as-is.
pub fn splicing_seq(parsers: Vec<BoxedParser>) -> BoxedParser {
    transform(seq(parsers), |val| match val {
        Value::Seq(vals) => {
            let mut spliced = Vec::with_capacity(vals.len());
            for val in vals {
                match val {
                    Value::Seq(inner) => spliced.extend(inner),
                    other => spliced.push(other),
                }
            }
            Ok(Value::Seq(spliced))
        }
        other => Ok(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::parser::parse_str;
    use crate::some::some;
    use crate::string::is_string;

    #[test]
    fn test_all_children_in_order() {
        let mut parser = seq(vec![is_char('a'), is_char('€'), is_char('c')]);
        let val = parse_str("a€c", &mut parser).unwrap();
        assert_eq!(
            val,
            Value::Seq(vec![
                Value::Rune('a'),
                Value::Rune('€'),
                Value::Rune('c')
            ])
        );
    }

    #[test]
    fn test_failure_reports_index_and_restores_everything() {
        let mut reader = Reader::new("a€d".as_bytes());
        let mut parser = seq(vec![is_char('a'), is_char('€'), is_char('c')]);

        match parser.parse(&mut reader) {
            Err(ParseError::SeqError { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected SeqError, got {:?}", other),
        }

        // The reader is byte-for-byte back at the start.
        let mut whole = is_string("a€d");
        assert_eq!(
            whole.parse(&mut reader).unwrap(),
            Value::Str("a€d".into())
        );
    }

    #[test]
    fn test_failure_at_first_child() {
        let mut parser = seq(vec![is_char('x')]);
        match parse_str("y", &mut parser) {
            Err(ParseError::SeqError { index, .. }) => assert_eq!(index, 0),
            other => panic!("expected SeqError, got {:?}", other),
        }
    }

    #[test]
    fn test_unread_restores_all_children() {
        let mut reader = Reader::new("abc".as_bytes());
        let mut parser = seq(vec![is_char('a'), is_char('b')]);

        parser.parse(&mut reader).unwrap();
        parser.unread(&mut reader);

        let mut whole = is_string("abc");
        assert_eq!(
            whole.parse(&mut reader).unwrap(),
            Value::Str("abc".into())
        );
    }

    #[test]
    fn test_empty_seq_succeeds_empty() {
        let mut parser = seq(vec![]);
        assert_eq!(parse_str("x", &mut parser).unwrap(), Value::Seq(vec![]));
    }

    #[test]
    fn test_splicing_flattens_one_level() {
        let mut parser = splicing_seq(vec![is_char('a'), some(is_char('b'))]);
        let val = parse_str("abb", &mut parser).unwrap();
        assert_eq!(
            val,
            Value::Seq(vec![
                Value::Rune('a'),
                Value::Rune('b'),
                Value::Rune('b')
            ])
        );
    }

    #[test]
    fn test_splicing_keeps_deeper_nesting() {
        // Only one level is spliced; a sequence inside a spliced child stays.
        let mut parser = splicing_seq(vec![
            is_char('a'),
            seq(vec![is_char('b'), seq(vec![is_char('c')])]),
        ]);
        let val = parse_str("abc", &mut parser).unwrap();
        assert_eq!(
            val,
            Value::Seq(vec![
                Value::Rune('a'),
                Value::Rune('b'),
                Value::Seq(vec![Value::Rune('c')]),
            ])
        );
    }
}
