use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::datetime::NaturalDateLabel;
use crate::services::calendar::{month_name_of, weekday_name};

/// Labels `target` relative to `today`, ignoring time of day.
///
/// Dates further than one day away render as "{weekday}, {day} de {month}",
/// without a year.
pub fn label_date(today: NaiveDate, target: NaiveDate) -> NaturalDateLabel {
    if target == today {
        NaturalDateLabel::Today
    } else if today.succ_opt() == Some(target) {
        NaturalDateLabel::Tomorrow
    } else if today.pred_opt() == Some(target) {
        NaturalDateLabel::Yesterday
    } else {
        NaturalDateLabel::Dated {
            weekday: weekday_name(target.weekday()),
            day: target.day(),
            month: month_name_of(&target),
        }
    }
}

/// Labels `target` against the calendar date of `now`, both read in `now`'s zone.
pub fn format_natural_date<Z, T>(now: &DateTime<Z>, target: &DateTime<T>) -> NaturalDateLabel
where
    Z: TimeZone,
    T: TimeZone,
{
    let zone = now.timezone();
    let target_date = target.with_timezone(&zone).date_naive();
    label_date(now.date_naive(), target_date)
}
