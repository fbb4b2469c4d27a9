use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use vendorhub_core::VendorId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_vendors).post(create_vendor))
        .route("/check-email", get(check_email))
        .route("/:id", delete(delete_vendor))
}

pub async fn list_vendors(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list().await {
        Ok(vendors) => {
            let items = vendors
                .into_iter()
                .map(dto::vendor_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
        }
        Err(err) => errors::store_error_to_response(err),
    }
}

pub async fn create_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateVendorRequest>,
) -> axum::response::Response {
    let candidate = match dto::to_new_vendor(body) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match services.store().insert(candidate).await {
        Ok(created) => (StatusCode::CREATED, Json(dto::vendor_to_json(created))).into_response(),
        Err(err) => errors::store_error_to_response(err),
    }
}

pub async fn delete_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: VendorId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid vendor ID"),
    };

    match services.store().delete(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "Vendor not found"),
        Err(err) => errors::store_error_to_response(err),
    }
}

pub async fn check_email(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CheckEmailQuery>,
) -> axum::response::Response {
    let email = match query.email {
        Some(email) if !email.is_empty() => email,
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "Email query parameter is required",
            )
        }
    };

    match services.store().email_exists(&email).await {
        Ok(exists) => (StatusCode::OK, Json(serde_json::json!({ "exists": exists }))).into_response(),
        Err(err) => errors::store_error_to_response(err),
    }
}
