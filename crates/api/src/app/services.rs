use vendorhub_store::{StoreError, VendorStore};

/// Shared application services handed to handlers via `Extension`.
#[derive(Debug, Clone)]
pub struct AppServices {
    store: VendorStore,
}

impl AppServices {
    pub fn new(store: VendorStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &VendorStore {
        &self.store
    }
}

/// Build application services.
///
/// With a URL, connects to that SQLite database (creating the schema if
/// needed); without one, uses an in-memory store. Tests and the black-box
/// server use the latter.
pub async fn build_services(db_url: Option<&str>) -> Result<AppServices, StoreError> {
    let store = match db_url {
        Some(url) => VendorStore::connect(url).await?,
        None => VendorStore::in_memory().await?,
    };
    Ok(AppServices::new(store))
}
