use chrono::NaiveDate;

#[must_use]
pub fn format_issue_date(value: NaiveDate) -> String {
    value.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_date_is_spelled_out() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 4).unwrap();
        assert_eq!(format_issue_date(date), "November 4, 2023");
    }
}
