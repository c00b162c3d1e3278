use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::datetime::{
        BusinessInfoResponse, CurrentDateTimeResponse, RelativeInfo, RelativeTimePayload,
        RelativeTimeResponse,
    },
    services::RelativeTimeError,
    state::AppState,
};

const CURRENT_ERROR_CONTEXT: &str = "Erro ao obter data/hora";
const BUSINESS_ERROR_CONTEXT: &str = "Erro ao obter contexto";
const RELATIVE_ERROR_CONTEXT: &str = "Erro ao calcular tempo";

pub async fn current_datetime(
    State(state): State<AppState>,
) -> Result<Json<CurrentDateTimeResponse>, AppError> {
    let info = state
        .datetime
        .describe_now()
        .map_err(|e| AppError::internal(CURRENT_ERROR_CONTEXT, e))?;

    tracing::debug!(formatted = %info.formatted, "Described current moment");

    Ok(Json(CurrentDateTimeResponse {
        success: true,
        message: format!("Agora são {}", info.formatted),
        datetime_info: info,
    }))
}

pub async fn business_info(
    State(state): State<AppState>,
) -> Result<Json<BusinessInfoResponse>, AppError> {
    let report = state
        .datetime
        .describe_business_context()
        .map_err(|e| AppError::internal(BUSINESS_ERROR_CONTEXT, e))?;

    Ok(Json(BusinessInfoResponse {
        success: true,
        message: report.message,
        business_context: report.context,
        current_time: report.current_time,
    }))
}

pub async fn relative_time(
    State(state): State<AppState>,
    payload: Result<Json<RelativeTimePayload>, JsonRejection>,
) -> Result<Json<RelativeTimeResponse>, AppError> {
    let Json(payload) = payload?;
    let payload = payload.trimmed();
    payload.validate()?;

    let duration = state
        .datetime
        .compute_relative(payload.target_date.as_deref(), payload.target_time.as_deref())
        .map_err(|err| match err {
            RelativeTimeError::Input(input) => AppError::from(input),
            RelativeTimeError::Clock(source) => AppError::internal(RELATIVE_ERROR_CONTEXT, source),
        })?;

    let relative_info = RelativeInfo::from(duration);
    tracing::debug!(
        target_date = ?payload.target_date,
        target_time = ?payload.target_time,
        relative = %relative_info.relative_description,
        "Computed relative time"
    );

    Ok(Json(RelativeTimeResponse {
        success: true,
        message: format!("A data/hora alvo é {}", relative_info.relative_description),
        relative_info,
    }))
}
