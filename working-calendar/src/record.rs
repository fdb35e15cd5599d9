use std::str::FromStr;

use working_calendar_syntax::TokenPolicy;

use crate::error::ParseErrorKind;
use crate::month::MonthData;

/// Number of columns of a row: the year, twelve months and five yearly
/// totals.
pub const FIELD_COUNT: usize = 18;

/// The calendar of a single year.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarRecord {
    pub year: i32,
    /// Months from January to December.
    pub months: [MonthData; 12],
    /// Total number of working days in the year.
    pub workdays_counter: i32,
    /// Total number of days off in the year.
    pub holidays_counter: i32,
    /// Working hours in the year with a 40-hour work week.
    pub working_hours_40: f64,
    /// Working hours in the year with a 36-hour work week.
    pub working_hours_36: f64,
    /// Working hours in the year with a 24-hour work week.
    pub working_hours_24: f64,
}

impl CalendarRecord {
    /// Get the data of a month, numbered from 1 (January) to 12 (December).
    pub fn month(&self, month: u32) -> Option<&MonthData> {
        let month0 = usize::try_from(month.checked_sub(1)?).ok()?;
        self.months.get(month0)
    }

    /// Iterate over months of the year along with their number, starting
    /// from January.
    pub fn months(&self) -> impl Iterator<Item = (u32, &MonthData)> + '_ {
        (1..).zip(&self.months)
    }
}

/// Raw fields of a row, matched one by one against the expected columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CalendarRow<'r> {
    pub(crate) year: &'r str,
    pub(crate) months: [&'r str; 12],
    pub(crate) workdays_counter: &'r str,
    pub(crate) holidays_counter: &'r str,
    pub(crate) working_hours_40: &'r str,
    pub(crate) working_hours_36: &'r str,
    pub(crate) working_hours_24: &'r str,
}

impl<'r> CalendarRow<'r> {
    pub(crate) fn from_fields(fields: &[&'r str]) -> Result<Self, ParseErrorKind> {
        let &[
            year,
            january,
            february,
            march,
            april,
            may,
            june,
            july,
            august,
            september,
            october,
            november,
            december,
            workdays_counter,
            holidays_counter,
            working_hours_40,
            working_hours_36,
            working_hours_24,
        ] = fields
        else {
            return Err(ParseErrorKind::Arity { found: fields.len() });
        };

        Ok(Self {
            year,
            months: [
                january, february, march, april, may, june, july, august, september, october,
                november, december,
            ],
            workdays_counter,
            holidays_counter,
            working_hours_40,
            working_hours_36,
            working_hours_24,
        })
    }

    pub(crate) fn parse(self, policy: TokenPolicy) -> Result<CalendarRecord, ParseErrorKind> {
        Ok(CalendarRecord {
            year: parse_integer("year", self.year)?,
            months: parse_months(self.months, policy)?,
            workdays_counter: parse_integer("workdays counter", self.workdays_counter)?,
            holidays_counter: parse_integer("holidays counter", self.holidays_counter)?,
            working_hours_40: parse_float("working hours (40h week)", self.working_hours_40)?,
            working_hours_36: parse_float("working hours (36h week)", self.working_hours_36)?,
            working_hours_24: parse_float("working hours (24h week)", self.working_hours_24)?,
        })
    }
}

/// Parse the cells of the twelve months of a year, in calendar order.
pub fn parse_months(
    cells: [&str; 12],
    policy: TokenPolicy,
) -> Result<[MonthData; 12], ParseErrorKind> {
    let mut res: [MonthData; 12] = Default::default();

    for ((month, cell), data) in (1..).zip(cells).zip(&mut res) {
        *data = MonthData::parse(cell, policy)
            .map_err(|source| ParseErrorKind::Month { month, source })?;
    }

    Ok(res)
}

fn parse_integer<T>(field: &'static str, value: &str) -> Result<T, ParseErrorKind>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| ParseErrorKind::Integer {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ParseErrorKind> {
    value.parse().map_err(|source| ParseErrorKind::Float {
        field,
        value: value.to_string(),
        source,
    })
}
