use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, ParseErrorKind};
use crate::month::DayKind;
use crate::options::ParseOptions;
use crate::record::{CalendarRecord, CalendarRow};

/// A production calendar loaded from the CSV open data, indexed by year.
///
/// The loaded data is immutable and wrapped by an `Arc` so this is safe and
/// fast to clone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkingCalendar {
    years: Arc<BTreeMap<i32, CalendarRecord>>,
}

impl WorkingCalendar {
    /// Load a calendar from a CSV file. The first line of the file is a
    /// header and is skipped.
    ///
    /// ```
    /// use working_calendar::{Error, WorkingCalendar};
    ///
    /// assert!(matches!(
    ///     WorkingCalendar::open("does/not/exist.csv"),
    ///     Err(Error::NotFound(_)),
    /// ));
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::open_with(path, ParseOptions::default())
    }

    /// Load a calendar from a CSV file with custom options.
    pub fn open_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, Error> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let res = Self::from_reader_with(File::open(path)?, options)?;

        #[cfg(feature = "log")]
        log::debug!(
            "Loaded {} years of production calendar from {}",
            res.len(),
            path.display(),
        );

        Ok(res)
    }

    /// Load a calendar from CSV data, starting with a header line.
    ///
    /// ```
    /// use working_calendar::WorkingCalendar;
    ///
    /// let data = concat!(
    ///     "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Workdays,Holidays,40h,36h,24h\n",
    ///     "2018,\"1,2,3\",1,1,1,1,1,1,1,1,1,1,\"29*,30,31\",247,118,1970,1772.4,1179.6\n",
    /// );
    ///
    /// let calendar = WorkingCalendar::from_reader(data.as_bytes()).unwrap();
    /// let year = calendar.get(2018).unwrap();
    /// assert_eq!(year.workdays_counter, 247);
    /// assert!(year.month(12).unwrap().shortened_days.contains(&29));
    /// ```
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Self::from_reader_with(reader, ParseOptions::default())
    }

    /// Load a calendar from CSV data with custom options.
    pub fn from_reader_with(mut reader: impl Read, options: ParseOptions) -> Result<Self, Error> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load(&data, options)
    }

    fn load(data: &[u8], options: ParseOptions) -> Result<Self, Error> {
        // The header is skipped as raw bytes, its content is never checked
        let body = skip_line(data);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(b',')
            .quote(b'"')
            .trim(csv::Trim::All)
            .from_reader(body);

        let mut years = BTreeMap::new();
        let mut record = csv::StringRecord::new();

        // Physical line of the next row and the offset it was counted up to
        let mut line = 2;
        let mut counted = 0;

        loop {
            let row_start = counted + previous_break_rest(body, counted);
            line += count_line_breaks(&body[counted..row_start]);
            counted = row_start;

            // The CSV reader silently skips empty lines, which are rows
            // without any field
            if line_break_len(&body[row_start..]).is_some() {
                let kind = ParseErrorKind::Arity { found: 0 };
                return Err(Error::Parse { line, kind });
            }

            if !csv_reader.read_record(&mut record)? {
                break;
            }

            let fields: Vec<&str> = record.iter().collect();

            let parsed = CalendarRow::from_fields(&fields)
                .and_then(|row| row.parse(options.policy))
                .map_err(|kind| Error::Parse { line, kind })?;

            let year = parsed.year;

            if years.insert(year, parsed).is_some() {
                #[cfg(feature = "log")]
                log::warn!("Year {year} is defined twice, line {line} overrides it");
            }

            let row_end = usize::try_from(csv_reader.position().byte())
                .expect("CSV position out of the input");

            line += count_line_breaks(&body[counted..row_end]);
            counted = row_end;
        }

        Ok(Self { years: Arc::new(years) })
    }

    // --
    // -- Lookup
    // --

    /// Get the calendar of a year, if it is part of the loaded data.
    pub fn get(&self, year: i32) -> Option<&CalendarRecord> {
        self.years.get(&year)
    }

    /// Get the calendars of all loaded years.
    pub fn all(&self) -> &BTreeMap<i32, CalendarRecord> {
        &self.years
    }

    /// Iterate over loaded years, in increasing order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Number of loaded years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Return `true` if no year was loaded.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    // --
    // -- Date queries
    // --

    /// Get the kind of a date, or `None` if its year is not loaded.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use working_calendar::{DayKind, WorkingCalendar};
    ///
    /// let data = "header\n2018,8,23,8,1,9,12,1,1,1,1,5,31*,247,118,1970,1772.4,1179.6\n";
    /// let calendar = WorkingCalendar::from_reader(data.as_bytes()).unwrap();
    /// let date = |m, d| NaiveDate::from_ymd_opt(2018, m, d).unwrap();
    ///
    /// assert_eq!(calendar.day_kind(date(3, 8)), Some(DayKind::NonWorking));
    /// assert_eq!(calendar.day_kind(date(3, 9)), Some(DayKind::Working));
    /// assert_eq!(calendar.day_kind(date(12, 31)), Some(DayKind::Shortened));
    /// assert_eq!(calendar.day_kind(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()), None);
    /// ```
    pub fn day_kind(&self, date: NaiveDate) -> Option<DayKind> {
        let month = self.get(date.year())?.month(date.month())?;
        Some(month.day_kind(date.day()))
    }

    /// Check if a date is worked, even partially, or `None` if its year is
    /// not loaded.
    pub fn is_working_day(&self, date: NaiveDate) -> Option<bool> {
        self.day_kind(date).map(DayKind::is_working)
    }

    /// Get the first working day strictly after the given date. Years that
    /// are not loaded are skipped.
    pub fn next_working_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut curr = date.succ_opt()?;

        loop {
            match self.day_kind(curr) {
                Some(kind) if kind.is_working() => return Some(curr),
                Some(_) => curr = curr.succ_opt()?,
                None => {
                    let next_year = *self.years.range(curr.year() + 1..).next()?.0;
                    curr = NaiveDate::from_ymd_opt(next_year, 1, 1)?;
                }
            }
        }
    }
}

// --
// -- Line breaks
// --
//
// Lines may end with `\n`, `\r\n` or a lone `\r`.

/// Length of the line break at the start of `data`, if any.
fn line_break_len(data: &[u8]) -> Option<usize> {
    match data {
        [b'\r', b'\n', ..] => Some(2),
        [b'\r' | b'\n', ..] => Some(1),
        _ => None,
    }
}

/// Get the data following the first line.
fn skip_line(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == b'\r' || b == b'\n') {
        Some(pos) => {
            let rest = &data[pos..];
            &rest[line_break_len(rest).unwrap_or(0)..]
        }
        None => &[],
    }
}

/// Count the line breaks in `data`, a `\r\n` counts as a single one.
fn count_line_breaks(data: &[u8]) -> u64 {
    let mut count = 0;
    let mut rest = data;

    while let Some(pos) = rest.iter().position(|&b| b == b'\r' || b == b'\n') {
        rest = &rest[pos..];
        rest = &rest[line_break_len(rest).unwrap_or(1)..];
        count += 1;
    }

    count
}

/// Number of bytes at `offset` that still belong to the line break ending
/// the previous row: the CSV reader may stop before or in the middle of it.
fn previous_break_rest(data: &[u8], offset: usize) -> usize {
    let (before, after) = data.split_at(offset);

    match (before.last(), after.first()) {
        (None, _) => 0,
        (Some(b'\r'), Some(b'\n')) => 1,
        (Some(b'\r' | b'\n'), _) => 0,
        _ => line_break_len(after).unwrap_or(0),
    }
}
