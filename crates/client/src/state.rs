//! Application state behind the vendor list view.
//!
//! One instance per session/view, owned by the view layer. Each operation
//! resets the error message, and mutations re-fetch the full list so the view
//! always renders what the store holds.

use vendorhub_core::{NewVendor, Vendor, VendorId};

use crate::service::{ClientError, VendorApi};

/// Client-side state: current vendor list, loading flag, error message.
///
/// Failures collapse into a generic user-facing message per operation; the
/// underlying error is logged, and for mutations also handed back to the
/// caller so the view can react (e.g. keep a form open).
#[derive(Debug)]
pub struct VendorAppState<A: VendorApi> {
    api: A,
    vendors: Vec<Vendor>,
    loading: bool,
    error: Option<String>,
}

impl<A: VendorApi> VendorAppState<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            vendors: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Vendors in display order (most recently created first).
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-fetch the full list from the API.
    ///
    /// Failures surface through [`Self::error`], not the return value.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list_vendors().await {
            Ok(mut vendors) => {
                // The store lists in creation order; the view wants newest first.
                vendors.reverse();
                self.vendors = vendors;
            }
            Err(err) => {
                self.error = Some("Failed to load vendors. Please try again later.".to_string());
                tracing::error!("failed to fetch vendors: {err}");
            }
        }

        self.loading = false;
    }

    /// Create a vendor, then refresh so the list reflects the new row.
    pub async fn add(&mut self, candidate: NewVendor) -> Result<(), ClientError> {
        self.loading = true;
        self.error = None;

        match self.api.create_vendor(&candidate).await {
            Ok(_) => {
                self.refresh().await;
                self.loading = false;
                Ok(())
            }
            Err(err) => {
                self.error = Some("Failed to add vendor. Please try again later.".to_string());
                tracing::error!("failed to add vendor: {err}");
                self.loading = false;
                Err(err)
            }
        }
    }

    /// Delete a vendor by id, then refresh.
    pub async fn remove(&mut self, id: VendorId) -> Result<(), ClientError> {
        self.loading = true;
        self.error = None;

        match self.api.delete_vendor(id).await {
            Ok(()) => {
                self.refresh().await;
                self.loading = false;
                Ok(())
            }
            Err(err) => {
                self.error = Some("Failed to delete vendor. Please try again later.".to_string());
                tracing::error!("failed to delete vendor {id}: {err}");
                self.loading = false;
                Err(err)
            }
        }
    }

    /// Ask the API whether an email is taken. Does not touch the loading flag.
    pub async fn check_email_exists(&mut self, email: &str) -> Result<bool, ClientError> {
        match self.api.check_email_exists(email).await {
            Ok(exists) => Ok(exists),
            Err(err) => {
                self.error = Some("Failed to check email. Please try again later.".to_string());
                tracing::error!("failed to check email: {err}");
                Err(err)
            }
        }
    }
}
