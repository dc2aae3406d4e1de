use either::Either;
use std::num::ParseIntError;

use crate::io::{Rejected, Unreadable};

/// Why a single line did not have the expected shape.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid integer literal")]
    Integer(#[source] ParseIntError),
    #[error("expected `<lower>-<upper> <char>: <password>`")]
    PolicyLine,
    #[error("invalid policy bound")]
    Bound(#[source] ParseIntError),
    #[error("unexpected terrain cell {0:?}, expected '.' or '#'")]
    TerrainCell(char),
}

impl From<ParseIntError> for ParseError {
    fn from(e: ParseIntError) -> Self {
        ParseError::Integer(e)
    }
}

/// Index or value computed outside of the range it has to fit in.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    #[error("position {position} is outside of password of length {len}")]
    Position { position: usize, len: usize },
    #[error("terrain map has no rows")]
    EmptyMap,
    #[error("terrain row {row} has no cells")]
    EmptyRow { row: usize },
    #[error("product of the tree counts does not fit in 64 bits")]
    ProductOverflow,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("writing output failed")]
    Io(#[from] std::io::Error),
    #[error("reading failed on line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing failed on line {line}: {text:?}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseError,
    },
    #[error("computation failed on line {line}: {text:?}")]
    Compute {
        line: usize,
        text: String,
        #[source]
        source: OutOfRange,
    },
    #[error("computation failed")]
    Map(#[source] OutOfRange),
}

impl Error {
    pub(crate) fn compute(line: usize, text: &str, source: OutOfRange) -> Self {
        Error::Compute {
            line,
            text: text.to_owned(),
            source,
        }
    }
}

impl<E: Into<ParseError>> From<Either<Rejected<E>, Unreadable>> for Error {
    fn from(e: Either<Rejected<E>, Unreadable>) -> Self {
        match e {
            Either::Left(Rejected { line, text, error }) => Error::Parse {
                line,
                text,
                source: error.into(),
            },
            Either::Right(Unreadable { line, error }) => Error::Read {
                line,
                source: error,
            },
        }
    }
}
