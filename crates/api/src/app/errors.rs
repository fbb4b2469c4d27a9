use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vendorhub_core::PartnerType;
use vendorhub_store::StoreError;

/// Map a store error to an HTTP response.
///
/// The duplicate-email conflict is a client error with a user-facing message;
/// everything else is an internal fault carrying the underlying message, and
/// gets logged server-side.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::DuplicateEmail => json_error(
            StatusCode::BAD_REQUEST,
            "A vendor with this email already exists. Please use a different email address.",
        ),
        other => {
            tracing::error!("store error: {other}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_partner_type(s: &str) -> Result<PartnerType, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "partner_type must be either \"Supplier\" or \"Partner\"",
        )
    })
}
