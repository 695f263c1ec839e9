use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use kanau::processor::Processor;
use prequal_core::entities::merchant_configuration::{
    GetMerchantConfiguration, UpdateMerchantPrequalConfiguration,
};
use prequal_sdk::objects::{
    MerchantConfigurationRequest, MerchantConfigurationResponse, MerchantConfigurationView,
};

use super::ApiError;
use crate::state::AppState;

/// `POST /merchants/{merchant_id}/configuration` — configure loan bounds and
/// enable or disable prequal.
///
/// Responds with the freshly generated configuration id.
pub(super) async fn submit_merchant_configuration(
    state: State<AppState>,
    Path(merchant_id): Path<String>,
    Json(payload): Json<MerchantConfigurationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let merchant_configuration_id = state
        .processor()
        .process(UpdateMerchantPrequalConfiguration {
            merchant_id,
            minimum_loan_amount: payload.minimum_loan_amount,
            maximum_loan_amount: payload.maximum_loan_amount,
            prequal_enabled: payload.prequal_enabled,
        })
        .await
        .map_err(ApiError::Rejected)?;

    Ok(Json(MerchantConfigurationResponse {
        merchant_configuration_id,
    }))
}

/// `GET /merchants/{merchant_id}/configuration` — read a merchant's current
/// configuration.
pub(super) async fn get_merchant_configuration(
    state: State<AppState>,
    Path(merchant_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(record) = state
        .processor()
        .process(GetMerchantConfiguration { merchant_id })
        .await;
    let record = record.ok_or(ApiError::MerchantNotFound)?;

    Ok(Json(MerchantConfigurationView::from(&record)))
}
