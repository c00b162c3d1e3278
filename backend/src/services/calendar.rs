//! Portuguese calendar vocabulary and the hour/weekday predicates shared by
//! every description of "now".

use chrono::{Datelike, Timelike, Weekday};

use crate::models::datetime::DayPeriod;

const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const BUSINESS_START_HOUR: u32 = 9;
const BUSINESS_END_HOUR: u32 = 18;

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize]
}

pub fn month_name_of<D: Datelike>(date: &D) -> &'static str {
    MONTHS[date.month0() as usize]
}

pub fn classify_hour(hour: u32) -> DayPeriod {
    match hour {
        5..=11 => DayPeriod::Manha,
        12..=17 => DayPeriod::Tarde,
        18..=23 => DayPeriod::Noite,
        _ => DayPeriod::Madrugada,
    }
}

pub fn day_period<T: Timelike>(moment: &T) -> DayPeriod {
    classify_hour(moment.hour())
}

pub fn is_weekend<D: Datelike>(date: &D) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday to Friday, 09:00 to 17:59.
pub fn is_business_hours<T: Datelike + Timelike>(moment: &T) -> bool {
    !is_weekend(moment) && (BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&moment.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn periods_partition_the_day() {
        let expected = [
            (0..5, DayPeriod::Madrugada),
            (5..12, DayPeriod::Manha),
            (12..18, DayPeriod::Tarde),
            (18..24, DayPeriod::Noite),
        ];
        for hour in 0..24 {
            let matches: Vec<_> = expected
                .iter()
                .filter(|(range, _)| range.contains(&hour))
                .collect();
            assert_eq!(matches.len(), 1, "hour {hour} must fall in one range");
            assert_eq!(classify_hour(hour), matches[0].1, "hour {hour}");
        }
    }

    #[test]
    fn period_boundaries() {
        assert_eq!(classify_hour(4), DayPeriod::Madrugada);
        assert_eq!(classify_hour(5), DayPeriod::Manha);
        assert_eq!(classify_hour(11), DayPeriod::Manha);
        assert_eq!(classify_hour(12), DayPeriod::Tarde);
        assert_eq!(classify_hour(17), DayPeriod::Tarde);
        assert_eq!(classify_hour(18), DayPeriod::Noite);
        assert_eq!(classify_hour(23), DayPeriod::Noite);
    }

    #[test]
    fn weekday_names_start_on_monday() {
        assert_eq!(weekday_name(Weekday::Mon), "segunda-feira");
        assert_eq!(weekday_name(Weekday::Sat), "sábado");
        assert_eq!(weekday_name(Weekday::Sun), "domingo");
    }

    #[test]
    fn month_names_follow_the_calendar() {
        let name = |m| month_name_of(&NaiveDate::from_ymd_opt(2025, m, 1).unwrap());
        assert_eq!(name(1), "janeiro");
        assert_eq!(name(3), "março");
        assert_eq!(name(8), "agosto");
        assert_eq!(name(12), "dezembro");
    }

    #[test]
    fn business_hours_window() {
        // 2025-01-15 is a Wednesday
        assert!(!is_business_hours(&at(2025, 1, 15, 8, 59)));
        assert!(is_business_hours(&at(2025, 1, 15, 9, 0)));
        assert!(is_business_hours(&at(2025, 1, 15, 17, 59)));
        assert!(!is_business_hours(&at(2025, 1, 15, 18, 0)));
    }

    #[test]
    fn weekends_are_never_business_hours() {
        let saturday = at(2025, 1, 4, 14, 0);
        let sunday = at(2025, 1, 5, 10, 0);
        assert!(is_weekend(&saturday));
        assert!(is_weekend(&sunday));
        assert!(!is_business_hours(&saturday));
        assert!(!is_business_hours(&sunday));
        assert!(!is_weekend(&at(2025, 1, 3, 10, 0)));
    }
}
