//! Opening hours evaluation for the POS status.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;

/// One `hours_of_operation` row: a daily slot repeated over a weekday range.
///
/// Weekdays run from `1` (Monday) to `7` (Sunday). A range with `from > to` wraps over the
/// week end, a slot with `hour_to <= hour_from` ends the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningSlot {
    pub day_from: u32,
    pub day_to: u32,
    pub hour_from: NaiveTime,
    pub hour_to: NaiveTime,
}

impl OpeningSlot {
    pub fn from_entity(entity: &entity::hours_of_operation::Model) -> Self {
        Self {
            day_from: u32::try_from(entity.day_of_week_from).unwrap_or(0),
            day_to: u32::try_from(entity.day_of_week_to).unwrap_or(0),
            hour_from: entity.hour_from,
            hour_to: entity.hour_to,
        }
    }

    fn covers_day(&self, day: u32) -> bool {
        if self.day_from <= self.day_to {
            (self.day_from..=self.day_to).contains(&day)
        } else {
            day >= self.day_from || day <= self.day_to
        }
    }

    fn overnight(&self) -> bool {
        self.hour_to <= self.hour_from
    }

    /// Whether `at` falls within the slot, bounds included.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let day = iso_weekday(at.date());
        let time = at.time();

        if !self.overnight() {
            return self.covers_day(day) && self.hour_from <= time && time <= self.hour_to;
        }

        let previous = if day == 1 { 7 } else { day - 1 };
        (self.covers_day(day) && time >= self.hour_from)
            || (self.covers_day(previous) && time <= self.hour_to)
    }

    /// First opening of this slot strictly after `at`, with its closing time.
    fn next_after(&self, at: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        (0..=7)
            .filter_map(|offset| at.date().checked_add_signed(TimeDelta::days(offset)))
            .filter(|date| self.covers_day(iso_weekday(*date)))
            .map(|date| {
                let start = date.and_time(self.hour_from);
                let end_date = if self.overnight() {
                    date.succ_opt().unwrap_or(date)
                } else {
                    date
                };
                (start, end_date.and_time(self.hour_to))
            })
            .find(|(start, _)| *start > at)
    }
}

/// Every enabled slot of a merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningHours(pub Vec<OpeningSlot>);

impl OpeningHours {
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.0.iter().any(|slot| slot.contains(at))
    }

    /// Earliest opening strictly after `at` within the coming week, with its closing time.
    pub fn next_opening(&self, at: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.0
            .iter()
            .filter_map(|slot| slot.next_after(at))
            .min_by_key(|(start, _)| *start)
    }
}

/// Wall-clock time of the merchant. An unknown zone name falls back to UTC.
pub fn local_time(timezone: &str, now: DateTime<Utc>) -> NaiveDateTime {
    match timezone.parse::<Tz>() {
        Ok(tz) => now.with_timezone(&tz).naive_local(),
        Err(err) => {
            tracing::warn!(timezone, error = %err, "unknown merchant timezone, using UTC");
            now.naive_utc()
        }
    }
}

fn iso_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}
