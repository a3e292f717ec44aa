//! # Recomb - Parser Combinators over Rewindable Streams
//!
//! Recomb builds parsers by composing small parsing elements into larger
//! ones. Parsers read from any byte source through a rewindable reader, so
//! streaming input works the same as in-memory strings. The library
//! emphasizes:
//!
//! - **Byte-exact backtracking**: a parser that fails restores the stream
//!   byte for byte, so any other parser can retry from the same position
//! - **Undoable success**: a parent combinator can unread a child's
//!   successful parse when a later sibling fails
//! - **Composability**: sequence, alternation, repetition, negation and
//!   bounded-backtracking dispatch combine into full grammars
//! - **Errors as values**: every failure mode is a distinguishable
//!   [`ParseError`] variant, never a panic
//!
//! Parsing a string is one call:
//!
//! ```
//! use recomb::{parse_str, seq, is_char, Value};
//!
//! let mut parser = seq(vec![is_char('h'), is_char('i')]);
//! let val = parse_str("hi", &mut parser).unwrap();
//! assert_eq!(val, Value::Seq(vec![Value::Rune('h'), Value::Rune('i')]));
//! ```

pub mod any_byte;
pub mod any_rune;
mod buffer;
pub mod byte;
pub mod char;
pub mod discard;
pub mod dispatch;
pub mod eof;
pub mod error;
pub mod except;
pub mod fail;
pub mod float;
pub mod int;
pub mod join;
pub mod logging;
pub mod many;
pub mod optional;
pub mod or;
pub mod parser;
pub mod reader;
pub mod recursive;
pub mod scanner;
pub mod sep;
pub mod seq;
pub mod some;
pub mod string;
pub mod transform;
pub mod value;
pub mod whitespace;

pub use any_byte::any_byte;
pub use any_rune::any_rune;
pub use byte::is_byte;
pub use char::{char_if, is_char};
pub use discard::{discard_left, discard_right};
pub use dispatch::{dispatch, Clause, DescribeClause, DispatchClause, StringJoiningClause};
pub use eof::eof;
pub use error::ParseError;
pub use except::except;
pub use fail::fail;
pub use float::float;
pub use int::{big_int, int};
pub use join::join_string;
pub use logging::logged;
pub use many::many;
pub use optional::optional;
pub use or::or;
pub use parser::{parse_reader, parse_str, BoxedParser, Parser};
pub use reader::Reader;
pub use recursive::recursive;
pub use scanner::Scanner;
pub use sep::sep;
pub use seq::{seq, splicing_seq};
pub use some::some;
pub use string::{delimited_string, is_string, is_string_ci};
pub use transform::{transform, transform_err};
pub use value::Value;
pub use whitespace::{swallow_leading_whitespace, swallow_trailing_whitespace, swallow_whitespace};
