//! SQLite vendor store.

use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use vendorhub_core::{NewVendor, PartnerType, Vendor, VendorId};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The `email` UNIQUE constraint was violated on insert.
    #[error("a vendor with this email already exists")]
    DuplicateEmail,

    /// A persisted row could not be mapped back to a [`Vendor`].
    #[error("failed to decode vendor row: {0}")]
    Decode(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// SQLite-backed store for vendor rows.
///
/// `SqlitePool` is `Send + Sync` and cheap to clone, so handlers can hold
/// their own `VendorStore` handle.
#[derive(Debug, Clone)]
pub struct VendorStore {
    pool: SqlitePool,
}

impl VendorStore {
    /// Connect to the given SQLite URL and ensure the schema exists.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = SqlitePool::connect(url).await?;
        let store = Self { pool };
        store.migrate().await?;
        tracing::debug!(url, "vendor store connected");
        Ok(store)
    }

    /// In-memory store, used by tests and the black-box API server.
    ///
    /// Pinned to a single connection: every connection to `sqlite::memory:`
    /// gets its own database, so a wider pool would scatter rows.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> StoreResult<()> {
        // partner_type is deliberately unconstrained here; the enumeration is
        // enforced at the API boundary.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vendors (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                name           TEXT NOT NULL,
                contact_person TEXT NOT NULL,
                email          TEXT NOT NULL UNIQUE,
                partner_type   TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All vendor rows in store order (ascending id).
    pub async fn list(&self) -> StoreResult<Vec<Vendor>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, contact_person, email, partner_type
            FROM vendors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_vendor).collect()
    }

    /// Persist a validated candidate; the store assigns the id.
    ///
    /// Returns [`StoreError::DuplicateEmail`] when the email is already taken.
    pub async fn insert(&self, candidate: NewVendor) -> StoreResult<Vendor> {
        let result = sqlx::query(
            r#"
            INSERT INTO vendors (name, contact_person, email, partner_type)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.contact_person)
        .bind(&candidate.email)
        .bind(candidate.partner_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
            _ => StoreError::Database(err),
        })?;

        Ok(candidate.with_id(result.last_insert_rowid()))
    }

    /// Delete the vendor with the given id.
    ///
    /// Returns `false` when no row matched.
    pub async fn delete(&self, id: VendorId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether any vendor row holds exactly this email.
    pub async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM vendors WHERE email = ?1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

fn row_to_vendor(row: SqliteRow) -> StoreResult<Vendor> {
    let partner_type: String = row.try_get("partner_type")?;
    let partner_type: PartnerType = partner_type
        .parse()
        .map_err(|e| StoreError::Decode(format!("{e}")))?;

    Ok(Vendor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        contact_person: row.try_get("contact_person")?,
        email: row.try_get("email")?,
        partner_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, email: &str) -> NewVendor {
        NewVendor::new(name, "Jo", email, PartnerType::Supplier).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = VendorStore::in_memory().await.unwrap();

        let first = store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();
        let second = store
            .insert(candidate("Globex", "hank@globex.com"))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.name, "Acme");
    }

    #[tokio::test]
    async fn list_returns_created_rows_in_id_order() {
        let store = VendorStore::in_memory().await.unwrap();
        store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();
        store
            .insert(candidate("Globex", "hank@globex.com"))
            .await
            .unwrap();

        let vendors = store.list().await.unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[0].name, "Acme");
        assert_eq!(vendors[1].name, "Globex");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_typed_error_and_keeps_first_row() {
        let store = VendorStore::in_memory().await.unwrap();
        store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();

        let err = store
            .insert(candidate("Acme Clone", "jo@acme.com"))
            .await
            .unwrap_err();
        match err {
            StoreError::DuplicateEmail => {}
            other => panic!("expected DuplicateEmail, got {other:?}"),
        }

        let vendors = store.list().await.unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].name, "Acme");
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_matching_row() {
        let store = VendorStore::in_memory().await.unwrap();
        let acme = store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();
        store
            .insert(candidate("Globex", "hank@globex.com"))
            .await
            .unwrap();

        assert!(store.delete(acme.id).await.unwrap());

        let vendors = store.list().await.unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].name, "Globex");
    }

    #[tokio::test]
    async fn delete_missing_id_reports_no_match_and_changes_nothing() {
        let store = VendorStore::in_memory().await.unwrap();
        store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();

        assert!(!store.delete(9999).await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn email_exists_matches_exact_email_only() {
        let store = VendorStore::in_memory().await.unwrap();
        store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();

        assert!(store.email_exists("jo@acme.com").await.unwrap());
        assert!(!store.email_exists("JO@acme.com").await.unwrap());
        assert!(!store.email_exists("jo@acme.org").await.unwrap());
    }

    #[tokio::test]
    async fn email_exists_reflects_deletion() {
        let store = VendorStore::in_memory().await.unwrap();
        let acme = store.insert(candidate("Acme", "jo@acme.com")).await.unwrap();
        assert!(store.email_exists("jo@acme.com").await.unwrap());

        store.delete(acme.id).await.unwrap();
        assert!(!store.email_exists("jo@acme.com").await.unwrap());
    }
}
