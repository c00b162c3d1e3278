use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDescriptor {
    #[schema(example = "DateTime Webhook Service")]
    pub service: String,
    #[schema(example = "online")]
    pub status: String,
    #[schema(example = "America/New_York")]
    pub timezone: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub service: String,
    #[schema(example = "14:30 de 15/01/2025")]
    pub current_time: String,
    pub timezone: String,
    #[schema(example = "online")]
    pub uptime: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SmokeTestResponse {
    #[schema(example = "success")]
    pub status: String,
    pub current_time: String,
    #[schema(example = "2025-01-16")]
    pub tomorrow: String,
    pub is_business_hours: bool,
    #[schema(example = "quarta-feira")]
    pub weekday: String,
    pub all_endpoints_working: bool,
}
