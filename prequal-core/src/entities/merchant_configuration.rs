use crate::framework::StoreProcessor;
use kanau::processor::Processor;
use rust_decimal::Decimal;
use std::convert::Infallible;
use thiserror::Error;
use uuid::Uuid;

/// Loan bounds and prequal settings for one merchant storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantConfiguration {
    pub merchant_id: String,
    pub name: String,
    pub minimum_loan_amount: Decimal,
    pub maximum_loan_amount: Decimal,
    /// Off until the merchant enables it through a configuration update.
    pub prequal_enabled: bool,
    /// Set by the most recent accepted update; `None` for untouched seeds.
    pub merchant_configuration_id: Option<Uuid>,
}

impl MerchantConfiguration {
    /// Create a seed record. The bounds are taken as given.
    pub fn new(
        merchant_id: impl Into<String>,
        name: impl Into<String>,
        minimum_loan_amount: Decimal,
        maximum_loan_amount: Decimal,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            name: name.into(),
            minimum_loan_amount,
            maximum_loan_amount,
            prequal_enabled: false,
            merchant_configuration_id: None,
        }
    }

    pub fn with_prequal_enabled(mut self, prequal_enabled: bool) -> Self {
        self.prequal_enabled = prequal_enabled;
        self
    }
}

/// Reasons a configuration update is rejected.
///
/// The `Display` text is the message shown to the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigurationError {
    #[error("Could not find that merchant.")]
    NotFound,
    #[error("Maximum loan amount must be larger than minimum loan amount.")]
    InvalidRange,
}

impl ConfigurationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigurationError::NotFound => "merchant_id",
            ConfigurationError::InvalidRange => "minimum_loan_amount",
        }
    }
}

#[derive(Debug, Clone)]
/// Look up a merchant record by identifier.
///
/// Yields a snapshot of the record, or `None` for an unknown merchant.
pub struct GetMerchantConfiguration {
    pub merchant_id: String,
}

impl Processor<GetMerchantConfiguration> for StoreProcessor {
    type Output = Option<MerchantConfiguration>;
    type Error = Infallible;
    #[tracing::instrument(skip_all, name = "Store:GetMerchantConfiguration")]
    async fn process(
        &self,
        query: GetMerchantConfiguration,
    ) -> Result<Option<MerchantConfiguration>, Infallible> {
        Ok(self.store.read().await.get(&query.merchant_id).cloned())
    }
}

#[derive(Debug, Clone)]
/// Replace a merchant's loan bounds and prequal flag.
///
/// Rules, checked in order:
/// 1. `maximum_loan_amount` must be strictly greater than `minimum_loan_amount`.
/// 2. The merchant must exist.
///
/// On success the record is mutated in place and stamped with a fresh
/// time-ordered (v7) configuration id, which is returned. Every accepted
/// update gets a new id, even if the values did not change.
pub struct UpdateMerchantPrequalConfiguration {
    pub merchant_id: String,
    pub minimum_loan_amount: Decimal,
    pub maximum_loan_amount: Decimal,
    pub prequal_enabled: bool,
}

impl Processor<UpdateMerchantPrequalConfiguration> for StoreProcessor {
    type Output = Uuid;
    type Error = ConfigurationError;
    #[tracing::instrument(
        skip_all,
        err(level = "debug"),
        name = "Store:UpdateMerchantPrequalConfiguration",
        fields(merchant_id = %update.merchant_id)
    )]
    async fn process(
        &self,
        update: UpdateMerchantPrequalConfiguration,
    ) -> Result<Uuid, ConfigurationError> {
        if update.maximum_loan_amount <= update.minimum_loan_amount {
            return Err(ConfigurationError::InvalidRange);
        }

        let mut records = self.store.write().await;
        let record = records
            .get_mut(&update.merchant_id)
            .ok_or(ConfigurationError::NotFound)?;

        let merchant_configuration_id = Uuid::now_v7();
        record.minimum_loan_amount = update.minimum_loan_amount;
        record.maximum_loan_amount = update.maximum_loan_amount;
        record.prequal_enabled = update.prequal_enabled;
        record.merchant_configuration_id = Some(merchant_configuration_id);

        tracing::info!(
            %merchant_configuration_id,
            prequal_enabled = update.prequal_enabled,
            "Merchant configuration updated"
        );
        Ok(merchant_configuration_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MerchantStore;
    use std::collections::HashSet;

    const EXISTING_MERCHANT_ID: &str = "4f572866-0e85-11ea-94a8-acde48001122";
    const MISSING_MERCHANT_ID: &str = "55555-AaAaA-4444-BbBb";

    fn processor() -> StoreProcessor {
        StoreProcessor::new(MerchantStore::new([MerchantConfiguration::new(
            EXISTING_MERCHANT_ID,
            "Zelda's Stationary",
            Decimal::new(10000, 2),
            Decimal::new(300000, 2),
        )]))
    }

    fn update(
        merchant_id: &str,
        min: i64,
        max: i64,
        prequal_enabled: bool,
    ) -> UpdateMerchantPrequalConfiguration {
        UpdateMerchantPrequalConfiguration {
            merchant_id: merchant_id.to_string(),
            minimum_loan_amount: Decimal::from(min),
            maximum_loan_amount: Decimal::from(max),
            prequal_enabled,
        }
    }

    async fn lookup(processor: &StoreProcessor, merchant_id: &str) -> Option<MerchantConfiguration> {
        let Ok(found) = processor
            .process(GetMerchantConfiguration {
                merchant_id: merchant_id.to_string(),
            })
            .await;
        found
    }

    #[tokio::test]
    async fn test_seed_record_is_unconfigured() {
        let processor = processor();
        let record = lookup(&processor, EXISTING_MERCHANT_ID).await;
        assert!(matches!(
            record,
            Some(MerchantConfiguration {
                prequal_enabled: false,
                merchant_configuration_id: None,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_lookup_unknown_merchant_is_none() {
        assert_eq!(lookup(&processor(), MISSING_MERCHANT_ID).await, None);
    }

    #[tokio::test]
    async fn test_update_applies_values_and_stamps_id() {
        let processor = processor();
        let result = processor
            .process(update(EXISTING_MERCHANT_ID, 200, 1000, true))
            .await;
        let record = lookup(&processor, EXISTING_MERCHANT_ID).await;

        assert!(result.is_ok());
        assert_eq!(
            record.as_ref().map(|r| (
                r.minimum_loan_amount,
                r.maximum_loan_amount,
                r.prequal_enabled
            )),
            Some((Decimal::from(200), Decimal::from(1000), true))
        );
        assert_eq!(
            record.and_then(|r| r.merchant_configuration_id),
            result.ok()
        );
    }

    #[tokio::test]
    async fn test_prequal_can_be_turned_off_again() {
        let processor = processor();
        let enabled = processor
            .process(update(EXISTING_MERCHANT_ID, 200, 1000, true))
            .await;
        assert!(enabled.is_ok());
        let disabled = processor
            .process(update(EXISTING_MERCHANT_ID, 200, 1000, false))
            .await;
        assert!(disabled.is_ok());

        let record = lookup(&processor, EXISTING_MERCHANT_ID).await;
        assert_eq!(record.map(|r| r.prequal_enabled), Some(false));
    }

    #[tokio::test]
    async fn test_unknown_merchant_is_not_found() {
        let result = processor()
            .process(update(MISSING_MERCHANT_ID, 200, 1000, true))
            .await;
        assert_eq!(result, Err(ConfigurationError::NotFound));
        assert_eq!(ConfigurationError::NotFound.field(), "merchant_id");
        assert_eq!(
            ConfigurationError::NotFound.to_string(),
            "Could not find that merchant."
        );
    }

    #[tokio::test]
    async fn test_inverted_or_equal_bounds_are_invalid() {
        let processor = processor();
        for (min, max) in [(60000, 2000), (1000, 1000), (1, 0)] {
            let result = processor
                .process(update(EXISTING_MERCHANT_ID, min, max, true))
                .await;
            assert_eq!(result, Err(ConfigurationError::InvalidRange));
        }
        assert_eq!(ConfigurationError::InvalidRange.field(), "minimum_loan_amount");
        assert_eq!(
            ConfigurationError::InvalidRange.to_string(),
            "Maximum loan amount must be larger than minimum loan amount."
        );
    }

    #[tokio::test]
    async fn test_invalid_range_wins_over_unknown_merchant() {
        let result = processor()
            .process(update(MISSING_MERCHANT_ID, 60000, 2000, true))
            .await;
        assert_eq!(result, Err(ConfigurationError::InvalidRange));
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_record_untouched() {
        let processor = processor();
        let before = lookup(&processor, EXISTING_MERCHANT_ID).await;
        let result = processor
            .process(update(EXISTING_MERCHANT_ID, 60000, 2000, true))
            .await;
        assert!(result.is_err());
        assert_eq!(lookup(&processor, EXISTING_MERCHANT_ID).await, before);
    }

    #[tokio::test]
    async fn test_each_update_gets_a_fresh_id() {
        let processor = processor();
        let mut ids = HashSet::new();
        for _ in 0..16 {
            let result = processor
                .process(update(EXISTING_MERCHANT_ID, 200, 1000, true))
                .await;
            assert!(result.is_ok());
            ids.extend(result.ok());
        }
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn test_update_is_visible_through_store_clones() {
        let processor = processor();
        let other = StoreProcessor::new(processor.store.clone());
        let result = other
            .process(update(EXISTING_MERCHANT_ID, 3000, 50000, true))
            .await;
        assert!(result.is_ok());

        let record = lookup(&processor, EXISTING_MERCHANT_ID).await;
        assert_eq!(
            record.map(|r| (r.minimum_loan_amount, r.maximum_loan_amount)),
            Some((Decimal::from(3000), Decimal::from(50000)))
        );
    }
}
