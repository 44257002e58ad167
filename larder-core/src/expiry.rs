//! Expiry classification.
//!
//! Everything here works on calendar dates. A timestamp is reduced to its
//! local date before any arithmetic, so two calls made on the same day at
//! different times always agree on the days-left count.

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::InventoryItem;

/// Freshness band for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// More than 5 days left.
    Fresh,
    /// 3 to 5 days left.
    Good,
    /// 0 to 2 days left.
    Expiring,
    /// Past its date.
    Expired,
    /// No usable expiry date.
    Unknown,
}

impl ExpiryStatus {
    /// Band for a days-left count. Each band is closed at its lower end.
    pub fn for_days(days: i64) -> Self {
        match days {
            d if d < 0 => ExpiryStatus::Expired,
            0..=2 => ExpiryStatus::Expiring,
            3..=5 => ExpiryStatus::Good,
            _ => ExpiryStatus::Fresh,
        }
    }

    pub fn for_date(expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        match expiry {
            Some(date) => Self::for_days(days_until_expiry(date, today)),
            None => ExpiryStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Fresh => "fresh",
            ExpiryStatus::Good => "good",
            ExpiryStatus::Expiring => "expiring",
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Unknown => "unknown",
        }
    }
}

/// Whole days from `today` until `expiry`. Negative once the date has passed.
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Like [`days_until_expiry`], normalizing `now` to its calendar date first.
pub fn days_until_expiry_at<Tz: TimeZone>(expiry: NaiveDate, now: &DateTime<Tz>) -> i64 {
    days_until_expiry(expiry, now.date_naive())
}

/// Display string for an item list row.
pub fn display_for(days: i64) -> String {
    match days {
        d if d < 0 => {
            let ago = d.unsigned_abs();
            let unit = if ago == 1 { "day" } else { "days" };
            format!("Expired {} {} ago", ago, unit)
        }
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("{} days left", d),
    }
}

/// Short badge text used on the expiring-soon panel.
pub fn urgency_label(days: i64) -> String {
    match days {
        d if d < 0 => "Expired".to_string(),
        0 => "Today!".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("{} days", d),
    }
}

/// Parse a user- or import-supplied expiry.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp (its date part), or a relative
/// `"N day(s)"` / `"N week(s)"` counted from `today`. Anything else is `None`,
/// which callers treat as an unknown expiry.
pub fn parse_expiry(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    let days = parse_relative_days(trimmed)?;
    today.checked_add_days(Days::new(days))
}

fn parse_relative_days(input: &str) -> Option<u64> {
    let mut parts = input.split_whitespace();
    let count: u64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?.to_lowercase();
    if parts.next().is_some() {
        return None;
    }

    match unit.as_str() {
        "day" | "days" => Some(count),
        "week" | "weeks" => count.checked_mul(7),
        _ => None,
    }
}

/// Derived expiry fields for one item, computed at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryInfo {
    pub status: ExpiryStatus,
    pub days_left: Option<i64>,
    pub display: String,
}

impl ExpiryInfo {
    pub fn compute(expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        match expiry {
            Some(date) => {
                let days = days_until_expiry(date, today);
                Self {
                    status: ExpiryStatus::for_days(days),
                    days_left: Some(days),
                    display: display_for(days),
                }
            }
            None => Self {
                status: ExpiryStatus::Unknown,
                days_left: None,
                display: "No expiry date".to_string(),
            },
        }
    }
}

/// An inventory item that is about to go (or has gone) off.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringItem {
    pub item: InventoryItem,
    pub days_left: i64,
    pub label: String,
}

pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_EXPIRING_LIMIT: usize = 5;

/// Items with at most `window_days` left (expired ones included), most urgent
/// first, capped at `limit`. Items without a usable date are left out.
pub fn expiring_soon(
    items: &[InventoryItem],
    today: NaiveDate,
    window_days: i64,
    limit: usize,
) -> Vec<ExpiringItem> {
    let mut expiring: Vec<ExpiringItem> = items
        .iter()
        .filter_map(|item| {
            let days = days_until_expiry(item.expiry_date?, today);
            (days <= window_days).then(|| ExpiringItem {
                item: item.clone(),
                days_left: days,
                label: urgency_label(days),
            })
        })
        .collect();

    // Stable sort keeps insertion order among equal days.
    expiring.sort_by_key(|e| e.days_left);
    expiring.truncate(limit);
    expiring
}

/// Dashboard counts over an inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpirySummary {
    pub total: usize,
    pub expired: usize,
    /// 0 to 2 days left.
    pub urgent: usize,
    /// Fresh or good.
    pub fresh: usize,
    pub unknown: usize,
}

impl ExpirySummary {
    pub fn tally(items: &[InventoryItem], today: NaiveDate) -> Self {
        let mut summary = Self {
            total: items.len(),
            ..Self::default()
        };

        for item in items {
            match ExpiryStatus::for_date(item.expiry_date, today) {
                ExpiryStatus::Expired => summary.expired += 1,
                ExpiryStatus::Expiring => summary.urgent += 1,
                ExpiryStatus::Fresh | ExpiryStatus::Good => summary.fresh += 1,
                ExpiryStatus::Unknown => summary.unknown += 1,
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::Category;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(id: i64, name: &str, expiry: Option<NaiveDate>) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            category: Category::Pantry,
            quantity: 1.0,
            unit: "count".to_string(),
            expiry_date: expiry,
            icon: "📦".to_string(),
            added_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_days_until_expiry() {
        let today = date(2024, 6, 10);
        assert_eq!(days_until_expiry(date(2024, 6, 10), today), 0);
        assert_eq!(days_until_expiry(date(2024, 6, 11), today), 1);
        assert_eq!(days_until_expiry(date(2024, 6, 7), today), -3);
        assert_eq!(days_until_expiry(date(2024, 7, 10), today), 30);
    }

    #[test]
    fn test_time_of_day_does_not_matter() {
        let expiry = date(2024, 6, 12);
        let early = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 10, 23, 59, 59).unwrap();
        assert_eq!(days_until_expiry_at(expiry, &early), 2);
        assert_eq!(days_until_expiry_at(expiry, &late), 2);
    }

    #[test]
    fn test_timezone_date_is_used() {
        // 23:30 UTC on the 10th is already the 11th in UTC+2
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 23, 30, 0).unwrap();
        let plus_two = now.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(days_until_expiry_at(date(2024, 6, 12), &now), 2);
        assert_eq!(days_until_expiry_at(date(2024, 6, 12), &plus_two), 1);
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(ExpiryStatus::for_days(-30), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::for_days(-1), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::for_days(0), ExpiryStatus::Expiring);
        assert_eq!(ExpiryStatus::for_days(2), ExpiryStatus::Expiring);
        assert_eq!(ExpiryStatus::for_days(3), ExpiryStatus::Good);
        assert_eq!(ExpiryStatus::for_days(5), ExpiryStatus::Good);
        assert_eq!(ExpiryStatus::for_days(6), ExpiryStatus::Fresh);
        assert_eq!(ExpiryStatus::for_days(365), ExpiryStatus::Fresh);
    }

    #[test]
    fn test_status_for_dates_relative_to_today() {
        let today = date(2024, 2, 27);
        let status = |d| ExpiryStatus::for_date(Some(d), today);
        assert_eq!(status(date(2024, 2, 26)), ExpiryStatus::Expired);
        assert_eq!(status(today), ExpiryStatus::Expiring);
        // crosses the leap day
        assert_eq!(status(date(2024, 3, 1)), ExpiryStatus::Good);
        assert_eq!(status(date(2024, 3, 4)), ExpiryStatus::Fresh);
        assert_eq!(
            ExpiryStatus::for_date(None, today),
            ExpiryStatus::Unknown
        );
    }

    #[test]
    fn test_display_for() {
        assert_eq!(display_for(-1), "Expired 1 day ago");
        assert_eq!(display_for(-3), "Expired 3 days ago");
        assert_eq!(display_for(0), "Expires today");
        assert_eq!(display_for(1), "Expires tomorrow");
        assert_eq!(display_for(2), "2 days left");
        assert_eq!(display_for(14), "14 days left");
    }

    #[test]
    fn test_urgency_label() {
        assert_eq!(urgency_label(-2), "Expired");
        assert_eq!(urgency_label(0), "Today!");
        assert_eq!(urgency_label(1), "Tomorrow");
        assert_eq!(urgency_label(4), "4 days");
    }

    #[test]
    fn test_parse_expiry() {
        let today = date(2024, 6, 10);
        assert_eq!(parse_expiry("2024-06-20", today), Some(date(2024, 6, 20)));
        assert_eq!(
            parse_expiry(" 2024-06-20T08:15:00Z ", today),
            Some(date(2024, 6, 20))
        );
        assert_eq!(parse_expiry("7 days", today), Some(date(2024, 6, 17)));
        assert_eq!(parse_expiry("1 day", today), Some(date(2024, 6, 11)));
        assert_eq!(parse_expiry("2 weeks", today), Some(date(2024, 6, 24)));
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        let today = date(2024, 6, 10);
        assert_eq!(parse_expiry("", today), None);
        assert_eq!(parse_expiry("soon", today), None);
        assert_eq!(parse_expiry("2024-13-45", today), None);
        assert_eq!(parse_expiry("7 fortnights", today), None);
        assert_eq!(parse_expiry("-3 days", today), None);
        assert_eq!(parse_expiry("3 days from now", today), None);
    }

    #[test]
    fn test_expiry_info_unknown() {
        let info = ExpiryInfo::compute(None, date(2024, 6, 10));
        assert_eq!(info.status, ExpiryStatus::Unknown);
        assert_eq!(info.days_left, None);
    }

    #[test]
    fn test_expiring_soon_sorts_filters_and_caps() {
        let today = date(2024, 6, 10);
        let items = vec![
            item(1, "Milk", Some(date(2024, 6, 12))),
            item(2, "Rice", Some(date(2024, 9, 1))),
            item(3, "Spinach", Some(date(2024, 6, 8))),
            item(4, "Mystery", None),
            item(5, "Bread", Some(date(2024, 6, 17))),
            item(6, "Cheese", Some(date(2024, 6, 10))),
            item(7, "Eggs", Some(date(2024, 6, 15))),
            item(8, "Yogurt", Some(date(2024, 6, 11))),
        ];

        let soon = expiring_soon(&items, today, DEFAULT_EXPIRING_WINDOW_DAYS, 5);
        let names: Vec<&str> = soon.iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(names, vec!["Spinach", "Cheese", "Yogurt", "Milk", "Eggs"]);
        assert_eq!(soon[0].days_left, -2);
        assert_eq!(soon[0].label, "Expired");
        assert_eq!(soon[1].label, "Today!");

        let all = expiring_soon(&items, today, DEFAULT_EXPIRING_WINDOW_DAYS, 100);
        // Bread sits exactly on the 7-day window edge, Rice is outside it
        assert_eq!(all.len(), 6);
        assert_eq!(all.last().unwrap().item.name, "Bread");
    }

    #[test]
    fn test_summary_tally() {
        let today = date(2024, 6, 10);
        let items = vec![
            item(1, "a", Some(date(2024, 6, 1))),
            item(2, "b", Some(date(2024, 6, 10))),
            item(3, "c", Some(date(2024, 6, 12))),
            item(4, "d", Some(date(2024, 6, 14))),
            item(5, "e", Some(date(2024, 7, 1))),
            item(6, "f", None),
        ];
        let summary = ExpirySummary::tally(&items, today);
        assert_eq!(
            summary,
            ExpirySummary {
                total: 6,
                expired: 1,
                urgent: 2,
                fresh: 2,
                unknown: 1,
            }
        );
    }
}
