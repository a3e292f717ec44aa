use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Every way a parse can fail, as a distinguishable variant.
///
/// Errors are values: a failed parser restores the reader and hands one of
/// these to its caller. Combinators wrap child errors where the extra
/// context matters (`SeqError`, `DescribeClause`) and pass them through
/// verbatim everywhere else. Message texts are for humans; match on the
/// variant to react programmatically.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The source ran out of bytes.
    #[error("unexpected end of input")]
    EndOfInput,

    /// The underlying source failed with an I/O error.
    #[error("read error: {0}")]
    Read(Arc<io::Error>),

    /// `any_rune` could not assemble a valid UTF-8 code point.
    #[error("expected rune")]
    RuneExpected,

    /// `is_byte` read a different byte.
    #[error("could not parse expected byte 0x{expected:02x}: unexpected byte 0x{actual:02x}")]
    ByteMismatch { expected: u8, actual: u8 },

    /// `is_char` read a different rune.
    #[error("could not parse expected rune {expected:?}: unexpected rune {actual:?}")]
    RuneMismatch { expected: char, actual: char },

    /// `is_char` could not read a rune at all.
    #[error("could not parse expected rune {expected:?}: {cause}")]
    RuneMismatchNoRune { expected: char, cause: Box<ParseError> },

    /// `char_if` read a rune that fails the predicate.
    #[error("could not parse expected rune: rune {actual:?} does not hold predicate")]
    RunePredicateFailed { actual: char },

    /// `char_if` could not read a rune at all.
    #[error("could not parse expected rune: {cause}")]
    RunePredicateNoRune { cause: Box<ParseError> },

    /// `is_string` read the right number of bytes but they differ.
    #[error("could not parse expected string {expected:?}: unexpected string {actual:?}")]
    StringMismatch { expected: String, actual: String },

    /// `is_string` could not read enough bytes.
    #[error("could not parse expected string {expected:?}: {cause}")]
    StringError { expected: String, cause: Box<ParseError> },

    /// A byte was found where none was allowed; cause inside `ExpectedEof`.
    #[error("found byte 0x{actual:02x}")]
    FoundByte { actual: u8 },

    /// `eof` found more input.
    #[error("expected EOF: {cause}")]
    ExpectedEof { cause: Box<ParseError> },

    /// `int` or `big_int` could not lex or convert an integer.
    #[error("could not parse int: {cause}")]
    IntegerError { cause: Box<ParseError> },

    /// The lexed text is not convertible to the integer type.
    #[error("could not parse {actual:?} as int")]
    IntegerConversion { actual: String },

    /// `float` could not lex or convert a float.
    #[error("could not parse float: {cause}")]
    FloatError { cause: Box<ParseError> },

    /// A `seq` child failed; `index` is the position of that child.
    #[error("could not find expected sequence item {index}: {cause}")]
    SeqError { index: usize, cause: Box<ParseError> },

    /// `except` saw its excepted parser succeed.
    #[error("excepted parser matched")]
    ExceptionMatched,

    /// No dispatch clause's first parser matched.
    #[error("no dispatch clause matched")]
    DispatchWithoutMatch,

    /// A committed dispatch clause failed; carries the clause description.
    #[error("{description} expected: {cause}")]
    DescribeClause { description: String, cause: Box<ParseError> },

    /// An opaque error raised by `fail` or a user transformer.
    #[error("{0}")]
    User(String),
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Read(Arc::new(err))
    }
}
