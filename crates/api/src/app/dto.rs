use axum::http::StatusCode;
use serde::Deserialize;

use vendorhub_core::{NewVendor, Vendor};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Candidate vendor record as posted by clients.
///
/// All fields are optional at the deserialization layer so that missing and
/// empty fields produce the same client error from the handler, instead of a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub partner_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    pub email: Option<String>,
}

// -------------------------
// Mapping helpers
// -------------------------

/// Validate a create request into a domain candidate.
pub fn to_new_vendor(req: CreateVendorRequest) -> Result<NewVendor, axum::response::Response> {
    let name = req.name.unwrap_or_default();
    let contact_person = req.contact_person.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let partner_type = req.partner_type.unwrap_or_default();

    if name.trim().is_empty()
        || contact_person.trim().is_empty()
        || email.trim().is_empty()
        || partner_type.trim().is_empty()
    {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "All fields are required",
        ));
    }

    let partner_type = errors::parse_partner_type(&partner_type)?;

    NewVendor::new(name, contact_person, email, partner_type)
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, e.to_string()))
}

pub fn vendor_to_json(vendor: Vendor) -> serde_json::Value {
    serde_json::json!({
        "id": vendor.id,
        "name": vendor.name,
        "contact_person": vendor.contact_person,
        "email": vendor.email,
        "partner_type": vendor.partner_type.as_str(),
    })
}
