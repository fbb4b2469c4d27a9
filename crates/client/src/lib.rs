//! `vendorhub-client` — frontend-side plumbing for the vendor API.
//!
//! Two layers, mirroring the view → state → service → API flow:
//! - [`service`]: thin HTTP wrapper over the vendor endpoints
//! - [`state`]: application state (vendor list, loading flag, error message)
//!   that drives the list view

pub mod service;
pub mod state;

pub use service::{ClientError, VendorApi, VendorService};
pub use state::VendorAppState;
