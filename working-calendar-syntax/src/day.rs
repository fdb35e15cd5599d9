use std::fmt::Display;

/// Suffix attached to a day number in a month cell.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayMarker {
    /// No suffix: a weekend or a public holiday.
    #[default]
    Plain,
    /// Suffix `+`: a day off moved from another date.
    Moved,
    /// Suffix `*`: a shortened working day.
    Shortened,
}

impl DayMarker {
    /// The suffix written after the day number in a month cell.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Moved => "+",
            Self::Shortened => "*",
        }
    }
}

impl Display for DayMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single day listed in a month cell.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayToken {
    pub day: u32,
    pub marker: DayMarker,
}

impl DayToken {
    pub fn new(day: u32, marker: DayMarker) -> Self {
        Self { day, marker }
    }

    /// Return `true` if this day is a shortened working day. Any other token
    /// refers to a day off.
    ///
    /// ```
    /// use working_calendar_syntax::{DayMarker, DayToken};
    ///
    /// assert!(DayToken::new(30, DayMarker::Shortened).is_shortened());
    /// assert!(!DayToken::new(4, DayMarker::Moved).is_shortened());
    /// ```
    pub fn is_shortened(&self) -> bool {
        self.marker == DayMarker::Shortened
    }
}

impl Display for DayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.day, self.marker)
    }
}

/// How strictly tokens of a month cell are read.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Drop any ASCII punctuation from a token and classify it as shortened
    /// if it contained a `*`. This accepts tokens such as `3-` or `3;`.
    #[default]
    Permissive,
    /// Only accept a day number followed by at most one `+` or `*`.
    Strict,
}
