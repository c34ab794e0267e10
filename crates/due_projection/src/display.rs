use chrono::Datelike;
use chrono::NaiveDate;

/// Formats a due date the way planning tables show it, e.g. "15 Jan 2026".
/// An unschedulable record renders as "-".
pub fn format_date_display(date: Option<NaiveDate>) -> String
{
    match date {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Whether a calculated next due date falls in the given year.
pub fn is_due_in_year(next_due_date: Option<NaiveDate>, target_year: i32) -> bool
{
    next_due_date.is_some_and(|date| date.year() == target_year)
}
