//! HTTP client for the vendor API.

use async_trait::async_trait;
use serde::Deserialize;

use vendorhub_core::{NewVendor, Vendor, VendorId};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status; carries the server's
    /// `{error}` message when one was present.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// The seam between application state and the HTTP layer.
///
/// State logic is written against this trait so it can be exercised without a
/// running server; [`VendorService`] is the real implementation.
#[async_trait]
pub trait VendorApi: Send + Sync {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, ClientError>;
    async fn create_vendor(&self, candidate: &NewVendor) -> Result<Vendor, ClientError>;
    async fn delete_vendor(&self, id: VendorId) -> Result<(), ClientError>;
    async fn check_email_exists(&self, email: &str) -> Result<bool, ClientError>;
}

/// Thin `reqwest` wrapper over the vendor endpoints.
#[derive(Debug, Clone)]
pub struct VendorService {
    base_url: String,
    client: reqwest::Client,
}

impl VendorService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Turn a non-success response into a typed error, preferring the
    /// server's `{error}` body over the raw text.
    async fn error_from_response(resp: reqwest::Response) -> ClientError {
        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        ClientError::Api { status, message }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct ExistsBody {
    exists: bool,
}

#[async_trait]
impl VendorApi for VendorService {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/vendors", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn create_vendor(&self, candidate: &NewVendor) -> Result<Vendor, ClientError> {
        let resp = self
            .client
            .post(format!("{}/vendors", self.base_url))
            .json(candidate)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn delete_vendor(&self, id: VendorId) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(format!("{}/vendors/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        Ok(())
    }

    async fn check_email_exists(&self, email: &str) -> Result<bool, ClientError> {
        let resp = self
            .client
            .get(format!("{}/vendors/check-email", self.base_url))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        let body: ExistsBody = resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(body.exists)
    }
}
