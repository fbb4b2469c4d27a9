//! `vendorhub-store` — SQLite-backed vendor persistence.
//!
//! The store owns the `vendors` table and exposes the four operations the API
//! needs: list, insert, delete, email existence. Uniqueness of `email` is
//! enforced by the schema; violations surface as a typed
//! [`StoreError::DuplicateEmail`] rather than as error-string matching in
//! callers.

pub mod sqlite;

pub use sqlite::{StoreError, StoreResult, VendorStore};
