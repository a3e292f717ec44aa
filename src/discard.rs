use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;

/// Which side of the pair is kept as the result.
#[derive(Clone, Copy)]
enum Keep {
    Left,
    Right,
}

/// Parser for a pair of parsers where only one side's result is kept. Both
/// sides must succeed; if the right side fails after the left succeeded,
/// the left is unread before the right's error is reported.
pub struct Discard {
    left: BoxedParser,
    right: BoxedParser,
    keep: Keep,
}

impl Parser for Discard {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        let left_val = self.left.parse(src)?;

        let right_val = match self.right.parse(src) {
            Ok(val) => val,
            Err(err) => {
                self.left.unread(src);
                return Err(err);
            }
        };

        match self.keep {
            Keep::Left => Ok(left_val),
            Keep::Right => Ok(right_val),
        }
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        self.right.unread(src);
        self.left.unread(src);
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Discard {
            left: self.left.clone_parser(),
            right: self.right.clone_parser(),
            keep: self.keep,
        })
    }
}

/// Runs both parsers and keeps only the right result.
pub fn discard_left(left: BoxedParser, right: BoxedParser) -> BoxedParser {
    Box::new(Discard {
        left,
        right,
        keep: Keep::Right,
    })
}

/// Runs both parsers and keeps only the left result.
pub fn discard_right(left: BoxedParser, right: BoxedParser) -> BoxedParser {
    Box::new(Discard {
        left,
        right,
        keep: Keep::Left,
    })
}
