use chrono::{Datelike, NaiveDate};

/// Today according to the local wall clock. Aggregations take the
/// reference date as a parameter so tests can pin it.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Calendar month bucket, e.g. "2024-03".
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// ISO week bucket, e.g. "2024-W11". The ISO week year can differ
/// from the calendar year around new year.
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(month_key(date), "2024-03");
    }

    #[test]
    fn test_iso_week_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert_eq!(iso_week_key(date), "2024-W11");
    }

    #[test]
    fn test_iso_week_key_year_boundary() {
        // 2021-01-01 falls into week 53 of the ISO year 2020.
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(iso_week_key(date), "2020-W53");
    }
}
