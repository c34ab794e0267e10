use chrono::NaiveDate;

pub mod frequency;
pub mod history;
pub mod master_record;

/// Parses a stored date field from a legacy export.
///
/// Accepts `YYYY-MM-DD` and ISO date-times (the date part is taken). A field
/// that does not parse is treated as absent rather than as a fault, the
/// records come from hand-edited browser exports.
pub fn parse_maintenance_date(raw: &str) -> Option<NaiveDate>
{
    let date_part = raw.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests
{
    use chrono::NaiveDate;

    use super::parse_maintenance_date;

    #[test]
    fn test_parse_maintenance_date()
    {
        assert_eq!(
            parse_maintenance_date("2026-01-15"),
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
        assert_eq!(
            parse_maintenance_date(" 2026-01-15 "),
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
        assert_eq!(
            parse_maintenance_date("2026-01-15T00:00:00.000Z"),
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_parse_maintenance_date_malformed()
    {
        assert_eq!(parse_maintenance_date(""), None);
        assert_eq!(parse_maintenance_date("not a date"), None);
        assert_eq!(parse_maintenance_date("2026-13-40"), None);
        assert_eq!(parse_maintenance_date("15/01/2026"), None);
    }
}
