use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /merchants/{merchant_id}/configuration`.
///
/// Amounts travel as decimal strings (`"200.00"`); plain JSON numbers are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantConfigurationRequest {
    pub minimum_loan_amount: Decimal,
    pub maximum_loan_amount: Decimal,
    pub prequal_enabled: bool,
}

/// Response body of a successful configuration update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantConfigurationResponse {
    /// Identifier generated for this accepted update.
    pub merchant_configuration_id: Uuid,
}

/// The current configuration of a merchant, as returned by
/// `GET /merchants/{merchant_id}/configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConfigurationView {
    pub merchant_id: String,
    pub name: String,
    pub minimum_loan_amount: Decimal,
    pub maximum_loan_amount: Decimal,
    pub prequal_enabled: bool,
    /// `None` until the merchant has submitted a configuration.
    pub merchant_configuration_id: Option<Uuid>,
}

/// Structured rejection naming the offending request field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
