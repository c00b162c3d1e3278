//! Descriptions of a single reading of "now".
//!
//! Every function here takes the instant as an argument so that all fields of
//! one response come from the same reading.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;

use crate::models::datetime::{BusinessContext, BusinessReport, DateTimeInfo};
use crate::services::calendar::{
    day_period, is_business_hours, is_weekend, month_name_of, weekday_name,
};
use crate::services::natural_date::format_natural_date;

pub fn format_time_24h(now: &DateTime<Tz>) -> String {
    now.format("%H:%M").to_string()
}

/// "HH:MM de DD/MM/YYYY"
pub fn format_clock_and_date(now: &DateTime<Tz>) -> String {
    now.format("%H:%M de %d/%m/%Y").to_string()
}

pub fn describe_moment(now: &DateTime<Tz>) -> DateTimeInfo {
    let period = day_period(now);
    let date_natural = format_natural_date(now, now).to_string();
    let time_24h = format_time_24h(now);
    let formatted = format!("{} de {}, {}", period, date_natural, time_24h);

    DateTimeInfo {
        formatted,
        time_24h,
        date_br: now.format("%d/%m/%Y").to_string(),
        weekday_name: weekday_name(now.weekday()).to_string(),
        month_name: month_name_of(now).to_string(),
        day_period: period,
        date_natural,
        is_weekend: is_weekend(now),
        is_business_hours: is_business_hours(now),
        year: now.year(),
        month: now.month(),
        day: now.day(),
        hour: now.hour(),
        minute: now.minute(),
    }
}

pub fn describe_business_context(now: &DateTime<Tz>) -> BusinessReport {
    let context = BusinessContext {
        is_business_hours: is_business_hours(now),
        is_weekend: is_weekend(now),
        day_period: day_period(now),
        weekday_name: weekday_name(now.weekday()).to_string(),
    };

    // Weekend wins over the hour window.
    let message = if context.is_weekend {
        format!("Hoje é {}, fim de semana", context.weekday_name)
    } else if context.is_business_hours {
        format!(
            "Estamos em horário comercial, {} de {}",
            context.day_period, context.weekday_name
        )
    } else {
        format!(
            "Estamos fora do horário comercial, {} de {}",
            context.day_period, context.weekday_name
        )
    };

    BusinessReport {
        message,
        context,
        current_time: format_time_24h(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::datetime::DayPeriod;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    fn ny(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn describes_a_weekday_afternoon() {
        let info = describe_moment(&ny(2025, 1, 15, 14, 30));
        assert_eq!(info.formatted, "tarde de hoje, 14:30");
        assert_eq!(info.time_24h, "14:30");
        assert_eq!(info.date_br, "15/01/2025");
        assert_eq!(info.weekday_name, "quarta-feira");
        assert_eq!(info.month_name, "janeiro");
        assert_eq!(info.day_period, DayPeriod::Tarde);
        assert_eq!(info.date_natural, "hoje");
        assert!(!info.is_weekend);
        assert!(info.is_business_hours);
        assert_eq!(
            (info.year, info.month, info.day, info.hour, info.minute),
            (2025, 1, 15, 14, 30)
        );
    }

    #[test]
    fn pads_early_hours() {
        let info = describe_moment(&ny(2025, 3, 2, 3, 5));
        assert_eq!(info.formatted, "madrugada de hoje, 03:05");
        assert_eq!(info.date_br, "02/03/2025");
        assert_eq!(info.month_name, "março");
        assert!(info.is_weekend);
        assert!(!info.is_business_hours);
    }

    #[test]
    fn same_instant_gives_identical_descriptions() {
        let now = ny(2025, 6, 20, 9, 0);
        assert_eq!(describe_moment(&now), describe_moment(&now));
        assert_eq!(describe_business_context(&now), describe_business_context(&now));
    }

    #[test]
    fn weekend_takes_priority_over_hours() {
        let report = describe_business_context(&ny(2025, 1, 4, 14, 0));
        assert_eq!(report.message, "Hoje é sábado, fim de semana");
        assert!(report.context.is_weekend);
        assert!(!report.context.is_business_hours);
        assert_eq!(report.context.day_period, DayPeriod::Tarde);
        assert_eq!(report.current_time, "14:00");
    }

    #[test]
    fn business_hours_message() {
        let report = describe_business_context(&ny(2025, 1, 15, 10, 15));
        assert_eq!(
            report.message,
            "Estamos em horário comercial, manhã de quarta-feira"
        );
        assert!(report.context.is_business_hours);
    }

    #[test]
    fn outside_business_hours_message() {
        let report = describe_business_context(&ny(2025, 1, 15, 20, 0));
        assert_eq!(
            report.message,
            "Estamos fora do horário comercial, noite de quarta-feira"
        );
        assert!(!report.context.is_business_hours);
        assert!(!report.context.is_weekend);
    }

    #[test]
    fn clock_and_date_format() {
        assert_eq!(
            format_clock_and_date(&ny(2025, 1, 15, 14, 30)),
            "14:30 de 15/01/2025"
        );
    }
}
