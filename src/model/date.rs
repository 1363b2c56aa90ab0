use chrono::NaiveDate;

/// Display format used everywhere a stage date is shown or typed.
pub const DATE_FORMAT: &str = "%d.%m.%y";

/// Parse a `dd.mm.yy` date string.
///
/// Two-digit years are taken as 2000+; a year written with three or more
/// digits is used as-is. Returns `None` for anything that is not exactly
/// three numeric parts or does not form a real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.trim().split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    let year = if year < 100 { year + 2000 } else { year };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date as `dd.mm.yy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
