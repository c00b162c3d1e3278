use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

use crate::error::TemporalError;
use crate::models::datetime::{RelativeDuration, RelativeInfo};
use crate::utils::time::localize;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

pub const DEFAULT_TARGET_TIME: &str = "00:00";

/// Parses the caller's "YYYY-MM-DD" date and optional "HH:MM" time.
pub fn parse_target(
    target_date: Option<&str>,
    target_time: Option<&str>,
) -> Result<NaiveDateTime, TemporalError> {
    let raw_date = target_date
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(TemporalError::MissingTargetDate)?;
    let raw_time = target_time.map(str::trim).unwrap_or(DEFAULT_TARGET_TIME);

    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidTargetDate(raw_date.to_string()))?;
    let time = NaiveTime::parse_from_str(raw_time, "%H:%M")
        .map_err(|_| TemporalError::InvalidTargetTime(raw_time.to_string()))?;

    Ok(date.and_time(time))
}

/// Distance from `now` to `target`, whole seconds, remainder below a minute dropped.
pub fn relative_between(now: &DateTime<Tz>, target: &DateTime<Tz>) -> RelativeDuration {
    let diff_seconds = target.signed_duration_since(now).num_seconds();
    let abs_seconds = diff_seconds.unsigned_abs();

    RelativeDuration {
        is_future: diff_seconds > 0,
        days: abs_seconds / SECONDS_PER_DAY,
        hours: (abs_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
        minutes: (abs_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
    }
}

/// Localizes the caller's wall-clock target in `tz` and measures it against `now`.
pub fn compute_relative(
    target_date: Option<&str>,
    target_time: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<RelativeDuration, TemporalError> {
    let local = parse_target(target_date, target_time)?;
    relative_to_local(local, now)
}

/// Reads `local` as a wall-clock time in `now`'s zone and measures it against `now`.
pub fn relative_to_local(
    local: NaiveDateTime,
    now: &DateTime<Tz>,
) -> Result<RelativeDuration, TemporalError> {
    let target = localize(&now.timezone(), local)?;
    Ok(relative_between(now, &target))
}

fn quantity(value: u64, singular: &str) -> String {
    let suffix = if value != 1 { "s" } else { "" };
    format!("{} {}{}", value, singular, suffix)
}

impl RelativeDuration {
    /// Spoken magnitude, keeping at most the two largest units.
    pub fn description(&self) -> String {
        if self.days > 0 {
            let mut text = quantity(self.days, "dia");
            if self.hours > 0 {
                text.push_str(" e ");
                text.push_str(&quantity(self.hours, "hora"));
            }
            text
        } else if self.hours > 0 {
            let mut text = quantity(self.hours, "hora");
            if self.minutes > 0 {
                text.push_str(" e ");
                text.push_str(&quantity(self.minutes, "minuto"));
            }
            text
        } else if self.minutes > 0 {
            quantity(self.minutes, "minuto")
        } else {
            "menos de 1 minuto".to_string()
        }
    }

    pub fn relative_description(&self) -> String {
        let prefix = if self.is_future { "em" } else { "há" };
        format!("{} {}", prefix, self.description())
    }
}

impl From<RelativeDuration> for RelativeInfo {
    fn from(duration: RelativeDuration) -> Self {
        RelativeInfo {
            description: duration.description(),
            relative_description: duration.relative_description(),
            is_future: duration.is_future,
            difference_days: duration.days,
            difference_hours: duration.hours,
            difference_minutes: duration.minutes,
        }
    }
}
