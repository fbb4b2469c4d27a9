//! `vendorhub-core` — vendor domain building blocks.
//!
//! This crate contains **pure domain** types and validation (no IO, no HTTP,
//! no storage).

pub mod error;
pub mod vendor;

pub use error::{DomainError, DomainResult};
pub use vendor::{NewVendor, PartnerType, Vendor, VendorId};
