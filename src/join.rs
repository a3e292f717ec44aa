use crate::parser::BoxedParser;
use crate::transform::transform;
use crate::value::Value;

/// Wraps a parser returning a sequence of runes and strings (nested
/// sequences included) so that it returns a single joined string instead.
///
/// The wrapped parser WILL PANIC if it produces anything that is not a
/// rune, a string, or a sequence of those.
pub fn join_string(parser: BoxedParser) -> BoxedParser {
    transform(parser, |val| Ok(Value::Str(join_to_string(val))))
}

pub(crate) fn join_to_string(val: Value) -> String {
    let mut joined = String::new();
    join_into(&mut joined, val);
    joined
}

fn join_into(joined: &mut String, val: Value) {
    match val {
        Value::Rune(r) => joined.push(r),
        Value::Str(s) => joined.push_str(&s),
        Value::Seq(vals) => {
            for val in vals {
                join_into(joined, val);
            }
        }
        other => panic!("cannot join {:?} into a string", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::parser::parse_str;
    use crate::seq::seq;
    use crate::some::some;
    use crate::string::is_string;

    #[test]
    fn test_joins_runes() {
        let mut parser = join_string(some(is_char('a')));
        assert_eq!(
            parse_str("aaa", &mut parser).unwrap(),
            Value::Str("aaa".into())
        );
    }

    #[test]
    fn test_joins_mixed_runes_and_strings() {
        let mut parser = join_string(seq(vec![is_char('x'), is_string("yz")]));
        assert_eq!(
            parse_str("xyz", &mut parser).unwrap(),
            Value::Str("xyz".into())
        );
    }

    #[test]
    fn test_joins_nested_sequences() {
        let mut parser = join_string(seq(vec![
            is_char('a'),
            seq(vec![is_char('b'), is_char('c')]),
        ]));
        assert_eq!(
            parse_str("abc", &mut parser).unwrap(),
            Value::Str("abc".into())
        );
    }

    #[test]
    fn test_empty_sequence_joins_to_empty_string() {
        let mut parser = join_string(some(is_char('a')));
        assert_eq!(parse_str("z", &mut parser).unwrap(), Value::Str("".into()));
    }

    #[test]
    #[should_panic]
    fn test_foreign_shape_panics() {
        join_to_string(Value::Int(3));
    }
}
