use crate::store::MerchantStore;

/// Runs entity queries and commands against the in-memory [`MerchantStore`].
#[derive(Clone)]
pub struct StoreProcessor {
    pub store: MerchantStore,
}

impl StoreProcessor {
    pub fn new(store: MerchantStore) -> Self {
        Self { store }
    }
}
