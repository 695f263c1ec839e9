pub mod merchant_configuration;

use prequal_sdk::objects::{FieldError, MerchantConfigurationView};

use merchant_configuration::{ConfigurationError, MerchantConfiguration};

impl From<&MerchantConfiguration> for MerchantConfigurationView {
    fn from(value: &MerchantConfiguration) -> Self {
        MerchantConfigurationView {
            merchant_id: value.merchant_id.clone(),
            name: value.name.clone(),
            minimum_loan_amount: value.minimum_loan_amount,
            maximum_loan_amount: value.maximum_loan_amount,
            prequal_enabled: value.prequal_enabled,
            merchant_configuration_id: value.merchant_configuration_id,
        }
    }
}

impl From<ConfigurationError> for FieldError {
    fn from(value: ConfigurationError) -> Self {
        FieldError::new(value.field(), value.to_string())
    }
}
