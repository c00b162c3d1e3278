use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Coarse bucket of the day used in spoken phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DayPeriod {
    #[serde(rename = "madrugada")]
    Madrugada,
    #[serde(rename = "manhã")]
    Manha,
    #[serde(rename = "tarde")]
    Tarde,
    #[serde(rename = "noite")]
    Noite,
}

impl DayPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayPeriod::Madrugada => "madrugada",
            DayPeriod::Manha => "manhã",
            DayPeriod::Tarde => "tarde",
            DayPeriod::Noite => "noite",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human reference to a calendar date relative to today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NaturalDateLabel {
    Today,
    Tomorrow,
    Yesterday,
    Dated {
        weekday: &'static str,
        day: u32,
        month: &'static str,
    },
}

impl fmt::Display for NaturalDateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaturalDateLabel::Today => f.write_str("hoje"),
            NaturalDateLabel::Tomorrow => f.write_str("amanhã"),
            NaturalDateLabel::Yesterday => f.write_str("ontem"),
            NaturalDateLabel::Dated {
                weekday,
                day,
                month,
            } => write!(f, "{}, {} de {}", weekday, day, month),
        }
    }
}

/// Full description of the current moment (`datetime_info`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DateTimeInfo {
    #[schema(example = "tarde de hoje, 14:30")]
    pub formatted: String,
    #[schema(example = "14:30")]
    pub time_24h: String,
    #[schema(example = "15/01/2025")]
    pub date_br: String,
    #[schema(example = "quarta-feira")]
    pub weekday_name: String,
    #[schema(example = "janeiro")]
    pub month_name: String,
    pub day_period: DayPeriod,
    #[schema(example = "hoje")]
    pub date_natural: String,
    pub is_weekend: bool,
    pub is_business_hours: bool,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Weekend and business-hours view of the current moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BusinessContext {
    pub is_business_hours: bool,
    pub is_weekend: bool,
    pub day_period: DayPeriod,
    pub weekday_name: String,
}

/// Business context together with its spoken message and the reading time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessReport {
    pub message: String,
    pub context: BusinessContext,
    pub current_time: String,
}

/// Signed distance between now and a target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDuration {
    pub is_future: bool,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RelativeInfo {
    #[schema(example = "2 dias e 3 horas")]
    pub description: String,
    #[schema(example = "em 2 dias e 3 horas")]
    pub relative_description: String,
    pub is_future: bool,
    pub difference_days: u64,
    pub difference_hours: u64,
    pub difference_minutes: u64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct RelativeTimePayload {
    #[schema(example = "2025-01-01")]
    #[validate(length(max = 10))]
    pub target_date: Option<String>,
    #[schema(example = "14:30")]
    #[validate(length(max = 5))]
    pub target_time: Option<String>,
}

impl RelativeTimePayload {
    /// Strips surrounding whitespace so length bounds apply to the value itself.
    pub fn trimmed(self) -> Self {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        Self {
            target_date: trim(self.target_date),
            target_time: trim(self.target_time),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentDateTimeResponse {
    pub success: bool,
    #[schema(example = "Agora são tarde de hoje, 14:30")]
    pub message: String,
    pub datetime_info: DateTimeInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessInfoResponse {
    pub success: bool,
    pub message: String,
    pub business_context: BusinessContext,
    #[schema(example = "14:30")]
    pub current_time: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RelativeTimeResponse {
    pub success: bool,
    #[schema(example = "A data/hora alvo é em 2 dias e 3 horas")]
    pub message: String,
    pub relative_info: RelativeInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_period_serializes_with_accents() {
        assert_eq!(
            serde_json::to_value(DayPeriod::Manha).unwrap(),
            serde_json::json!("manhã")
        );
        assert_eq!(
            serde_json::to_value(DayPeriod::Madrugada).unwrap(),
            serde_json::json!("madrugada")
        );
    }

    #[test]
    fn natural_date_label_renders_dated_form() {
        let label = NaturalDateLabel::Dated {
            weekday: "sábado",
            day: 4,
            month: "janeiro",
        };
        assert_eq!(label.to_string(), "sábado, 4 de janeiro");
        assert_eq!(NaturalDateLabel::Tomorrow.to_string(), "amanhã");
    }

    #[test]
    fn relative_payload_accepts_missing_fields() {
        let payload: RelativeTimePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.target_date.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn relative_payload_rejects_oversized_time() {
        let payload = RelativeTimePayload {
            target_date: Some("2025-01-01".to_string()),
            target_time: Some("12:00:00".to_string()),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn relative_payload_bounds_apply_after_trimming() {
        let payload = RelativeTimePayload {
            target_date: Some("2025-01-01 ".to_string()),
            target_time: Some(" 10:00".to_string()),
        };
        assert!(payload.validate().is_err());

        let payload = payload.trimmed();
        assert_eq!(payload.target_date.as_deref(), Some("2025-01-01"));
        assert_eq!(payload.target_time.as_deref(), Some("10:00"));
        assert!(payload.validate().is_ok());
    }
}
