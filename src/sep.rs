use crate::discard::discard_left;
use crate::parser::{BoxedParser, Parser};
use crate::seq::splicing_seq;
use crate::some::some;

/// Parser for a list of items with separators between them.
///
/// At least one item is required; a trailing separator is not consumed.
/// The result is one flat sequence of item values, built as
/// `splicing_seq(item, some(discard_left(separator, item)))`.
pub fn sep(item: BoxedParser, separator: BoxedParser) -> BoxedParser {
    let first = item.clone_parser();
    splicing_seq(vec![first, some(discard_left(separator, item))])
}
