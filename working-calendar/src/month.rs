use std::collections::BTreeSet;

use working_calendar_syntax::{DayToken, TokenPolicy};

use crate::error::CellError;

/// How a day is worked according to the calendar.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayKind {
    Working,
    /// A working day with fewer working hours, usually right before a
    /// holiday.
    Shortened,
    /// A weekend, a public holiday or a day off moved from another date.
    NonWorking,
}

impl DayKind {
    /// Return `true` for any day that is worked, even partially.
    pub fn is_working(self) -> bool {
        matches!(self, Self::Working | Self::Shortened)
    }
}

/// Notable days of a month, any day not listed here is a regular working
/// day.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct MonthData {
    /// Days off: weekends, public holidays and days off moved from another
    /// date.
    pub holidays_and_weekends: BTreeSet<u32>,
    /// Shortened working days.
    pub shortened_days: BTreeSet<u32>,
}

impl MonthData {
    /// Parse a month cell such as `3,4+,30*`.
    ///
    /// A day listed both as a shortened day and as a day off in the same cell
    /// is only kept as a shortened day.
    ///
    /// ```
    /// use working_calendar::{DayKind, MonthData, TokenPolicy};
    ///
    /// let month = MonthData::parse("3,4+,30*", TokenPolicy::default()).unwrap();
    /// assert_eq!(month.holidays_and_weekends.iter().copied().collect::<Vec<_>>(), [3, 4]);
    /// assert_eq!(month.shortened_days.iter().copied().collect::<Vec<_>>(), [30]);
    /// assert_eq!(month.day_kind(5), DayKind::Working);
    /// ```
    pub fn parse(cell: &str, policy: TokenPolicy) -> Result<Self, CellError> {
        let tokens = working_calendar_syntax::parse(cell, policy)?;
        Ok(Self::from_tokens(tokens))
    }

    /// Collect parsed tokens of a month cell into days off and shortened days.
    pub fn from_tokens(tokens: impl IntoIterator<Item = DayToken>) -> Self {
        let mut res = Self::default();

        for token in tokens {
            if token.is_shortened() {
                res.shortened_days.insert(token.day);
            } else {
                res.holidays_and_weekends.insert(token.day);
            }
        }

        let shortened = &res.shortened_days;
        res.holidays_and_weekends.retain(|day| !shortened.contains(day));
        res
    }

    /// Get the kind of a day of this month. Days are not checked against the
    /// length of the month.
    pub fn day_kind(&self, day: u32) -> DayKind {
        if self.shortened_days.contains(&day) {
            DayKind::Shortened
        } else if self.holidays_and_weekends.contains(&day) {
            DayKind::NonWorking
        } else {
            DayKind::Working
        }
    }

    /// Return `true` if no day of this month is listed.
    pub fn is_empty(&self) -> bool {
        self.holidays_and_weekends.is_empty() && self.shortened_days.is_empty()
    }
}
