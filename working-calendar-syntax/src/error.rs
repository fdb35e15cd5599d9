use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    /// The cell does not match the grammar of strict cells.
    Parser(pest::error::Error<Rule>),
    /// A token has no day number left once its punctuation is removed.
    InvalidDay(String),
    /// A day number does not fit in 32 bits.
    Overflow { value: String, expected: String },
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{pest_err}"),
            Self::InvalidDay(token) => write!(f, "`{token}` is not a day number"),
            Self::Overflow { value, expected } => {
                write!(f, "{value} is too large: expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
