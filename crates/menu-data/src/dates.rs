//! Date handling: the requested range and tolerant date parsing.
//!
//! The API takes `M-D-YYYY` dates while the menu documents use whatever the
//! district's export happened to emit, so parsing accepts several shapes.

use crate::error::{MenuError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Longest range a single run may request.
pub const MAX_DAYS: u32 = 366;

/// Ordered, strictly increasing sequence of dates to report on.
///
/// Built once from the command line and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    dates: Vec<NaiveDate>,
}

impl DateRange {
    /// Build `days` consecutive dates starting at `start`.
    ///
    /// With `skip_weekends`, Saturdays and Sundays are stepped over and do not
    /// count towards `days`. A weekend start date just advances to Monday.
    /// `days` must be between 1 and [`MAX_DAYS`], and the range must end
    /// before the last date chrono can represent.
    pub fn build(start: NaiveDate, days: u32, skip_weekends: bool) -> Result<Self> {
        if days == 0 || days > MAX_DAYS {
            return Err(MenuError::InvalidInput {
                field: "days".to_string(),
                value: days.to_string(),
            });
        }

        let mut dates = Vec::new();
        let mut current = start;
        loop {
            if !(skip_weekends && is_weekend(current)) {
                dates.push(current);
                if dates.len() == days as usize {
                    break;
                }
            }
            current = current.succ_opt().ok_or_else(|| MenuError::InvalidInput {
                field: "start".to_string(),
                value: start.to_string(),
            })?;
        }

        Ok(Self { dates })
    }

    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        // Sorted, so a binary search is enough
        self.dates.binary_search(date).is_ok()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }
}

impl<'a> IntoIterator for &'a DateRange {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse the optional `--start` argument (ISO `YYYY-MM-DD`), falling back to `today`.
pub fn parse_start_date(start: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match start {
        None => Ok(today),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            MenuError::InvalidInput {
                field: "start".to_string(),
                value: s.to_string(),
            }
        }),
    }
}

/// Format a date the way the FamilyMenu API expects it: `M-D-YYYY`, no padding.
pub fn api_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.month(), date.day(), date.year())
}

/// Parse a date found inside a menu document.
///
/// Tries ISO `YYYY-MM-DD` on the first ten characters (so timestamps such as
/// `2024-03-05T00:00:00` work), then `M/D/YYYY`, then `M-D-YYYY`.
/// Returns `None` when nothing fits.
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let head = s.get(..10).unwrap_or(s);
    if let Ok(date) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        return Some(date);
    }

    ['/', '-']
        .into_iter()
        .find_map(|sep| parse_month_day_year(s, sep))
}

fn parse_month_day_year(s: &str, sep: char) -> Option<NaiveDate> {
    let mut parts = s.split(sep);
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
