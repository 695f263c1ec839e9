//! Application state shared across all request handlers.

use prequal_core::framework::StoreProcessor;
use prequal_core::store::MerchantStore;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (the store is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Merchant records, seeded at startup and mutated by updates.
    pub store: MerchantStore,
}

impl AppState {
    /// Create a new AppState around the given store.
    pub fn new(store: MerchantStore) -> Self {
        Self { store }
    }

    /// A processor for running store queries and commands.
    pub fn processor(&self) -> StoreProcessor {
        StoreProcessor::new(self.store.clone())
    }
}
