use crate::error::ParseError;
use crate::join::join_to_string;
use crate::parser::{BoxedParser, Parser};
use crate::reader::Reader;
use crate::value::Value;
use std::sync::Arc;

/// One alternative of a [`Dispatch`]: an ordered list of parsers plus hooks
/// to combine the parsed values into a single result and to reshape an
/// error raised inside the clause.
pub trait DispatchClause {
    /// Produces fresh parser instances for one attempt at this clause.
    fn parsers(&self) -> Vec<BoxedParser>;

    /// Combines the values of all clause parsers into the clause result.
    fn transform_result(&self, values: Vec<Value>) -> Value;

    /// Replaces or extends an error raised after the clause was committed.
    fn transform_error(&self, err: ParseError) -> ParseError;
}

/// The simplest clause: a list of parsers, values kept as a sequence,
/// errors untouched.
pub struct Clause(pub Vec<BoxedParser>);

impl DispatchClause for Clause {
    fn parsers(&self) -> Vec<BoxedParser> {
        self.0.iter().map(|p| p.clone_parser()).collect()
    }

    fn transform_result(&self, values: Vec<Value>) -> Value {
        Value::Seq(values)
    }

    fn transform_error(&self, err: ParseError) -> ParseError {
        err
    }
}

/// Clause wrapper that prefixes errors with a human description of what the
/// clause was parsing.
pub struct DescribeClause {
    inner: Box<dyn DispatchClause>,
    description: String,
}

impl DescribeClause {
    pub fn new<C>(inner: C, description: impl Into<String>) -> DescribeClause
    where
        C: DispatchClause + 'static,
    {
        DescribeClause {
            inner: Box::new(inner),
            description: description.into(),
        }
    }
}

impl DispatchClause for DescribeClause {
    fn parsers(&self) -> Vec<BoxedParser> {
        self.inner.parsers()
    }

    fn transform_result(&self, values: Vec<Value>) -> Value {
        self.inner.transform_result(values)
    }

    fn transform_error(&self, err: ParseError) -> ParseError {
        ParseError::DescribeClause {
            description: self.description.clone(),
            cause: Box::new(err),
        }
    }
}

/// Clause wrapper that joins the clause's rune, string and nested sequence
/// values into one string result.
///
/// Panics at result time if a clause value has any other shape, like
/// [`join_string`](crate::join::join_string).
pub struct StringJoiningClause {
    inner: Box<dyn DispatchClause>,
}

impl StringJoiningClause {
    pub fn new<C>(inner: C) -> StringJoiningClause
    where
        C: DispatchClause + 'static,
    {
        StringJoiningClause {
            inner: Box::new(inner),
        }
    }
}

impl DispatchClause for StringJoiningClause {
    fn parsers(&self) -> Vec<BoxedParser> {
        self.inner.parsers()
    }

    fn transform_result(&self, values: Vec<Value>) -> Value {
        Value::Str(join_to_string(Value::Seq(values)))
    }

    fn transform_error(&self, err: ParseError) -> ParseError {
        self.inner.transform_error(err)
    }
}

/// Combination of sequence and alternation with limited backtracking.
///
/// Clauses are tried in order, but only by their first parser. Once a
/// clause's first parser matches, that clause is committed: every remaining
/// parser of the clause must succeed, and a failure is reported through the
/// clause's error transform instead of trying later clauses.
///
/// The limited backtracking exists for error reporting. A failed
/// alternation only knows that nothing matched; a failed dispatch knows
/// which clause was being parsed and can say what was actually expected.
pub struct Dispatch {
    clauses: Vec<Arc<dyn DispatchClause>>,
    used: Option<Vec<BoxedParser>>,
}

impl Dispatch {
    pub fn new(clauses: Vec<Box<dyn DispatchClause>>) -> Dispatch {
        Dispatch {
            clauses: clauses.into_iter().map(Arc::from).collect(),
            used: None,
        }
    }

    /// Runs one clause. Returns `Ok(None)` when the clause was not
    /// committed (first parser failed, nothing consumed).
    fn try_clause(
        parsers: &mut Vec<BoxedParser>,
        src: &mut Reader<'_>,
    ) -> Result<Option<Vec<Value>>, ParseError> {
        let mut values = Vec::with_capacity(parsers.len());
        match parsers[0].parse(src) {
            Ok(val) => values.push(val),
            Err(_) => return Ok(None),
        }

        for i in 1..parsers.len() {
            match parsers[i].parse(src) {
                Ok(val) => values.push(val),
                Err(err) => {
                    for j in (0..i).rev() {
                        parsers[j].unread(src);
                    }
                    return Err(err);
                }
            }
        }
        Ok(Some(values))
    }
}

impl Parser for Dispatch {
    fn parse(&mut self, src: &mut Reader<'_>) -> Result<Value, ParseError> {
        for i in 0..self.clauses.len() {
            let clause = Arc::clone(&self.clauses[i]);
            let mut parsers = clause.parsers();
            if parsers.is_empty() {
                continue;
            }

            match Dispatch::try_clause(&mut parsers, src) {
                Ok(Some(values)) => {
                    self.used = Some(parsers);
                    return Ok(clause.transform_result(values));
                }
                Ok(None) => continue,
                Err(err) => return Err(clause.transform_error(err)),
            }
        }
        Err(ParseError::DispatchWithoutMatch)
    }

    fn unread(&mut self, src: &mut Reader<'_>) {
        if let Some(mut parsers) = self.used.take() {
            for parser in parsers.iter_mut().rev() {
                parser.unread(src);
            }
        }
    }

    fn clone_parser(&self) -> BoxedParser {
        Box::new(Dispatch {
            clauses: self.clauses.iter().map(Arc::clone).collect(),
            used: None,
        })
    }
}

/// Convenience function to create a dispatch parser.
pub fn dispatch(clauses: Vec<Box<dyn DispatchClause>>) -> BoxedParser {
    Box::new(Dispatch::new(clauses))
}
