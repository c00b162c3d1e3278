#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::{ErrorResponse, SmokeTestErrorResponse},
    models::{
        datetime::{
            BusinessContext, BusinessInfoResponse, CurrentDateTimeResponse, DateTimeInfo,
            DayPeriod, RelativeInfo, RelativeTimePayload, RelativeTimeResponse,
        },
        system::{HealthResponse, ServiceDescriptor, SmokeTestResponse},
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        home_doc,
        health_doc,
        smoke_test_doc,
        current_datetime_doc,
        business_info_doc,
        relative_time_doc
    ),
    components(
        schemas(
            // webhook payloads
            DateTimeInfo,
            DayPeriod,
            BusinessContext,
            RelativeInfo,
            RelativeTimePayload,
            CurrentDateTimeResponse,
            BusinessInfoResponse,
            RelativeTimeResponse,
            ErrorResponse,
            // service
            ServiceDescriptor,
            HealthResponse,
            SmokeTestResponse,
            SmokeTestErrorResponse
        )
    ),
    tags(
        (name = "Webhook", description = "Natural-language date/time for voice agents"),
        (name = "System", description = "Service descriptor, health and smoke test")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service descriptor", body = ServiceDescriptor)),
    tag = "System"
)]
fn home_doc() {}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "System"
)]
fn health_doc() {}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Smoke test summary", body = SmokeTestResponse),
        (status = 500, description = "Smoke test failed", body = SmokeTestErrorResponse)
    ),
    tag = "System"
)]
fn smoke_test_doc() {}

/// Also answers GET.
#[utoipa::path(
    post,
    path = "/webhook/datetime/current",
    responses(
        (status = 200, description = "Current moment in the configured timezone", body = CurrentDateTimeResponse),
        (status = 500, description = "Clock could not be read", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
fn current_datetime_doc() {}

/// Also answers GET.
#[utoipa::path(
    post,
    path = "/webhook/datetime/business-info",
    responses(
        (status = 200, description = "Weekend and business-hours context", body = BusinessInfoResponse),
        (status = 500, description = "Clock could not be read", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
fn business_info_doc() {}

#[utoipa::path(
    post,
    path = "/webhook/datetime/relative",
    request_body = RelativeTimePayload,
    responses(
        (status = 200, description = "Distance between now and the target", body = RelativeTimeResponse),
        (status = 400, description = "Missing or malformed target", body = ErrorResponse),
        (status = 500, description = "Clock could not be read", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
fn relative_time_doc() {}
