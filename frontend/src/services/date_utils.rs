use chrono::{Local, NaiveDate};

/// Today's date in the browser's local timezone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| Local::now().date_naive())
}

/// Get current date in YYYY-MM-DD format, for the `max` of date inputs
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Format a date for the table (e.g., "June 15, 2000")
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_for_display() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 5).unwrap();
        assert_eq!(format_date_for_display(date), "June 5, 2000");
    }
}
