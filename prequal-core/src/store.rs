//! Process-lifetime merchant record store.
//!
//! `MerchantStore` wraps `Arc<RwLock<HashMap<..>>>` so that every clone sees
//! the same records. Nothing is persisted; the store is seeded once at start.

use crate::entities::merchant_configuration::MerchantConfiguration;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared mapping from merchant identifier to its configuration record.
#[derive(Default)]
pub struct MerchantStore {
    inner: Arc<RwLock<HashMap<String, MerchantConfiguration>>>,
}

impl MerchantStore {
    /// Build a store from seed records, keyed by `merchant_id`.
    ///
    /// A later record with the same identifier replaces an earlier one.
    pub fn new(records: impl IntoIterator<Item = MerchantConfiguration>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.merchant_id.clone(), record))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Read access to all records.
    pub async fn read(&self) -> RwLockReadGuard<'_, HashMap<String, MerchantConfiguration>> {
        self.inner.read().await
    }

    /// Write access to all records.
    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, MerchantConfiguration>> {
        self.inner.write().await
    }

    /// Number of merchants in the store.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Clone for MerchantStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
