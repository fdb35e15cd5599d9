use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

pub use working_calendar_syntax::Error as CellError;

/// Failure to load a production calendar.
#[derive(Debug)]
pub enum Error {
    /// The input path does not refer to an existing file.
    NotFound(PathBuf),
    Io(std::io::Error),
    /// The input is not valid CSV (eg. invalid UTF-8 or broken quoting).
    Csv(csv::Error),
    /// A row does not describe a year of the calendar, `line` is the line
    /// number of the row in the input, counting the header as line 1.
    Parse { line: u64, kind: ParseErrorKind },
}

impl Error {
    /// Return `true` if the input could be read but holds invalid data.
    ///
    /// ```
    /// use working_calendar::WorkingCalendar;
    ///
    /// let err = WorkingCalendar::from_reader("header\n2018,bad".as_bytes()).unwrap_err();
    /// assert!(err.is_parse_failure());
    ///
    /// let err = WorkingCalendar::open("missing-calendar.csv").unwrap_err();
    /// assert!(!err.is_parse_failure());
    /// ```
    pub fn is_parse_failure(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::Io(_) => false,
            Self::Csv(err) => !err.is_io_error(),
            Self::Parse { .. } => true,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "no calendar file at `{}`", path.display()),
            Self::Io(err) => write!(f, "could not read calendar: {err}"),
            Self::Csv(err) => write!(f, "invalid CSV: {err}"),
            Self::Parse { line, kind } => write!(f, "line {line}: {kind}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Parse { kind, .. } => kind.source(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Why a single row could not be loaded.
#[derive(Clone, Debug)]
pub enum ParseErrorKind {
    /// The row does not have exactly one field per column.
    Arity { found: usize },
    Integer {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
    Float {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
    Month { month: u32, source: CellError },
}

impl ParseErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arity { .. } => None,
            Self::Integer { source, .. } => Some(source),
            Self::Float { source, .. } => Some(source),
            Self::Month { source, .. } => Some(source),
        }
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity { found } => {
                write!(f, "expected {} fields, found {found}", crate::record::FIELD_COUNT)
            }
            Self::Integer { field, value, source } => {
                write!(f, "invalid integer `{value}` for {field}: {source}")
            }
            Self::Float { field, value, source } => {
                write!(f, "invalid number `{value}` for {field}: {source}")
            }
            Self::Month { month, source } => write!(f, "invalid cell for month {month}: {source}"),
        }
    }
}
