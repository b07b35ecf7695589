//! Display formatting for travel dates.

use chrono::NaiveDate;

/// Format used by the date input on the planning form.
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Indian English long form, e.g. "Wednesday, 1 May, 2024".
const DISPLAY_FORMAT: &str = "%A, %-d %B, %Y";

/// Format a travel date for display.
///
/// Dates that do not parse as `YYYY-MM-DD` are returned unchanged, so
/// this never fails.
///
/// # Examples
///
/// ```
/// use ruta_server::domain::format_travel_date;
///
/// assert_eq!(format_travel_date("2024-05-01"), "Wednesday, 1 May, 2024");
/// assert_eq!(format_travel_date("next tuesday"), "next tuesday");
/// ```
pub fn format_travel_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), INPUT_FORMAT) {
        Ok(d) => d.format(DISPLAY_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}
