#![doc = include_str!("../../README.md")]

pub mod calendar;
pub mod error;
pub mod month;
pub mod options;
pub mod record;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::WorkingCalendar;
pub use crate::error::{Error, ParseErrorKind};
pub use crate::month::{DayKind, MonthData};
pub use crate::options::{ParseOptions, TokenPolicy};
pub use crate::record::CalendarRecord;
