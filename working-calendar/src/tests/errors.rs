use std::error::Error as _;

use working_calendar_syntax::TokenPolicy;

use crate::error::{CellError, Error, ParseErrorKind};
use crate::{ParseOptions, WorkingCalendar};

use super::{csv, fixture, row};

fn load(data: &str) -> Result<WorkingCalendar, Error> {
    WorkingCalendar::from_reader(data.as_bytes())
}

#[test]
fn file_not_found() {
    let path = fixture("does_not_exist.csv");

    match WorkingCalendar::open(&path) {
        Err(Error::NotFound(err_path)) => assert_eq!(err_path, path),
        other => panic!("expected a missing file error, got {other:?}"),
    }
}

#[test]
fn directory_is_not_a_file() {
    assert!(matches!(
        WorkingCalendar::open(fixture("")),
        Err(Error::NotFound(_)),
    ));
}

#[test]
fn missing_comma() {
    let err = WorkingCalendar::open(fixture("missing_comma.csv")).unwrap_err();
    assert!(err.is_parse_failure());

    assert!(matches!(
        err,
        Error::Parse { line: 3, kind: ParseErrorKind::Arity { found: 17 } },
    ));
}

#[test]
fn too_many_fields() {
    let data = csv(&[row("2018", ["1"; 12], "1,1,1,1,1,1")]);

    assert!(matches!(
        load(&data),
        Err(Error::Parse { line: 2, kind: ParseErrorKind::Arity { found: 19 } }),
    ));
}

#[test]
fn invalid_integers() {
    for (totals, expected_field) in [
        ("x,118,1970,1772.4,1179.6", "workdays counter"),
        ("247,11.8,1970,1772.4,1179.6", "holidays counter"),
        ("247,--1,1970,1772.4,1179.6", "holidays counter"),
    ] {
        let data = csv(&[row("2018", ["1"; 12], totals)]);

        match load(&data) {
            Err(Error::Parse { kind: ParseErrorKind::Integer { field, .. }, .. }) => {
                assert_eq!(field, expected_field)
            }
            other => panic!("expected an invalid integer for `{totals}`, got {other:?}"),
        }
    }

    let data = csv(&[row("two thousand", ["1"; 12], "1,1,1,1,1")]);

    assert!(matches!(
        load(&data),
        Err(Error::Parse { kind: ParseErrorKind::Integer { field: "year", .. }, .. }),
    ));
}

#[test]
fn invalid_floats() {
    let data = csv(&[row("2018", ["1"; 12], "247,118,1970,1772,4")]);
    assert!(load(&data).is_ok());

    let data = csv(&[row("2018", ["1"; 12], "247,118,1970,17 72,4")]);

    match load(&data) {
        Err(Error::Parse { kind: ParseErrorKind::Float { field, value, .. }, .. }) => {
            assert_eq!(field, "working hours (36h week)");
            assert_eq!(value, "17 72");
        }
        other => panic!("expected an invalid float, got {other:?}"),
    }
}

#[test]
fn invalid_month_cell() {
    let mut cells = ["1"; 12];
    cells[6] = "1,x*";
    let data = csv(&[row("2018", cells, "1,1,1,1,1")]);

    assert!(matches!(
        load(&data),
        Err(Error::Parse {
            line: 2,
            kind: ParseErrorKind::Month { month: 7, source: CellError::InvalidDay(_) },
        }),
    ));
}

#[test]
fn strict_policy() {
    let mut cells = ["1"; 12];
    cells[0] = "1,2-";
    let data = csv(&[row("2018", cells, "1,1,1,1,1")]);
    let strict = ParseOptions::default().with_policy(TokenPolicy::Strict);

    assert!(load(&data).is_ok());

    assert!(matches!(
        WorkingCalendar::from_reader_with(data.as_bytes(), strict),
        Err(Error::Parse {
            kind: ParseErrorKind::Month { month: 1, source: CellError::Parser(_) },
            ..
        }),
    ));
}

#[test]
fn failure_after_valid_rows() {
    // No partial calendar is returned when a late row is invalid
    let data = csv(&[
        row("2018", ["1"; 12], "1,1,1,1,1"),
        row("2019", ["1"; 12], "1,1,1,1,1"),
        row("2020", ["1"; 12], "1,1,1,1"),
    ]);

    assert!(matches!(load(&data), Err(Error::Parse { line: 4, .. })));
}

#[test]
fn invalid_utf8() {
    let mut data = format!("{}\n", super::HEADER).into_bytes();
    data.extend_from_slice(b"2018,\xff\xfe,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1\n");

    let err = WorkingCalendar::from_reader(data.as_slice()).unwrap_err();
    assert!(matches!(err, Error::Csv(_)));
    assert!(err.is_parse_failure());
}

#[test]
fn messages() {
    let err = load(&csv(&[row("2018", ["1"; 12], "1,1,1,1")])).unwrap_err();
    assert_eq!(err.to_string(), "line 2: expected 18 fields, found 17");
    assert!(err.source().is_none());

    let err = load(&csv(&[row("2018", ["1"; 12], "x,1,1,1,1")])).unwrap_err();

    assert_eq!(
        err.to_string(),
        "line 2: invalid integer `x` for workdays counter: invalid digit found in string",
    );

    assert!(err.source().is_some());

    let err = WorkingCalendar::open("missing.csv").unwrap_err();
    assert_eq!(err.to_string(), "no calendar file at `missing.csv`");
}

#[test]
fn blank_lines() {
    let valid = row("2018", ["1"; 12], "1,1,1,1,1");

    for (data, expected_line) in [
        (format!("header\n{valid}\n{valid}"), 3),
        (format!("header\n\n{valid}"), 2),
        (format!("header\n{valid}{valid}\n"), 4),
        (format!("header\n{valid}\n").replace('\n', "\r\n"), 3),
        (format!("header\n{valid}\n").replace('\n', "\r"), 3),
    ] {
        match load(&data) {
            Err(Error::Parse { line, kind: ParseErrorKind::Arity { found: 0 } }) => {
                assert_eq!(line, expected_line, "blank line in {data:?}")
            }
            other => panic!("expected an empty row in {data:?}, got {other:?}"),
        }
    }
}

#[test]
fn line_numbers_with_carriage_returns() {
    let data = csv(&[
        row("2018", ["1"; 12], "1,1,1,1,1"),
        row("2019", ["1"; 12], "1,1,1,1"),
    ]);

    for line_break in ["\r", "\r\n"] {
        assert!(matches!(
            load(&data.replace('\n', line_break)),
            Err(Error::Parse { line: 3, kind: ParseErrorKind::Arity { found: 17 } }),
        ));
    }
}
