use chrono::{Datelike as _, NaiveDate};

/// Display label for `day` as seen on `today`.
///
/// Today, Yesterday, the weekday name inside the last week, then `Jan 15`
/// within the current year and `Jan 15, 2024` otherwise. Days after `today`
/// get a plain date.
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    let days_ago = (today - day).num_days();
    match days_ago {
        0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => day.format("%A").to_string(),
        _ if day.year() == today.year() => day.format("%b %-d").to_string(),
        _ => day.format("%b %-d, %Y").to_string(),
    }
}
