mod errors;

use std::path::PathBuf;

const HEADER: &str = "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Workdays,Holidays,40h,36h,24h";

fn fixture(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "working-calendar/src/tests/data", name]
        .iter()
        .collect()
}

/// Build a CSV row with quoted month cells.
fn row(year: &str, months: [&str; 12], totals: &str) -> String {
    let months: Vec<_> = months.iter().map(|cell| format!("\"{cell}\"")).collect();
    format!("{year},{},{totals}\n", months.join(","))
}

/// Build CSV data with a header followed by given rows.
fn csv(rows: &[String]) -> String {
    let mut res = format!("{HEADER}\n");
    res.extend(rows.iter().map(String::as_str));
    res
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! days {
    ( $( $day: expr ),* $( , )? ) => {{
        let set: std::collections::BTreeSet<u32> = [$( $day ),*].into_iter().collect();
        set
    }};
}
