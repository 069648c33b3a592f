//! Business-day-aware deadline arithmetic.
//!
//! All stepping is one day at a time in the direction of the offset's
//! sign. With business-day stepping, weekend days are crossed without
//! counting toward the offset. Offsets beyond the configured limit are
//! rejected up front so the loop always terminates.

use chrono::{Datelike, Duration, NaiveDate};
use docket_core::constants::{DEFAULT_MAX_OFFSET_DAYS, ISO_DATE_FORMAT};
use docket_core::errors::{DocketError, DocketResult};

pub use docket_core::models::is_iso_date;

/// Formats the extraction producer is known to emit besides strict ISO.
/// Tried in order after the ISO fast path.
const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Datetime shapes that reduce to their date part.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Permissive date parsing: strict ISO first, then the known textual and
/// slash formats, then datetime prefixes.
pub fn parse_date(input: &str) -> DocketResult<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    Err(DocketError::DateParse {
        input: input.to_string(),
    })
}

/// Render a date in the strict external `YYYY-MM-DD` form.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Compute an absolute deadline from a base date and a signed day offset.
///
/// A zero offset returns the base normalized to ISO without stepping.
/// With `business_days_only`, only Monday-Friday steps count toward the
/// offset; the date still advances past weekends. Pure and deterministic.
pub fn compute_deadline(
    base_date: &str,
    offset_days: i64,
    business_days_only: bool,
) -> DocketResult<String> {
    let base = parse_date(base_date)?;
    let resolved = add_offset(base, offset_days, business_days_only, DEFAULT_MAX_OFFSET_DAYS)?;
    Ok(format_iso(resolved))
}

/// Offset arithmetic on an already parsed base, with an explicit
/// iteration bound. The cascade resolver calls this with the configured
/// limit; `compute_deadline` uses the default.
pub fn add_offset(
    base: NaiveDate,
    offset_days: i64,
    business_days_only: bool,
    max_offset_days: i64,
) -> DocketResult<NaiveDate> {
    if offset_days == 0 {
        return Ok(base);
    }
    if offset_days.checked_abs().map_or(true, |a| a > max_offset_days) {
        return Err(DocketError::DateRange {
            offset_days,
            max: max_offset_days,
        });
    }

    let step = if offset_days > 0 { 1 } else { -1 };
    let mut date = base;
    let mut counted = 0i64;
    while counted != offset_days {
        date = date
            .checked_add_signed(Duration::days(step))
            .ok_or(DocketError::DateRange {
                offset_days,
                max: max_offset_days,
            })?;
        if !business_days_only || is_business_day(date) {
            counted += step;
        }
    }
    Ok(date)
}

/// Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}
