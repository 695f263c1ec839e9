//! Merchant configuration client (merchant storefront backend → server).

use reqwest::Client;
use url::Url;
use uuid::Uuid;

use super::ClientError;
use crate::objects::{
    FieldError, MerchantConfigurationRequest, MerchantConfigurationResponse,
    MerchantConfigurationView,
};

/// Typed HTTP client for the merchant configuration endpoints.
#[derive(Debug, Clone)]
pub struct MerchantClient {
    http: Client,
    base_url: Url,
}

impl MerchantClient {
    /// Create a new `MerchantClient`.
    ///
    /// * `base_url` – root URL of the server (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /merchants/{merchant_id}/configuration` – submit loan bounds and
    /// the prequal flag. Returns the generated configuration identifier.
    pub async fn submit_configuration(
        &self,
        merchant_id: &str,
        request: &MerchantConfigurationRequest,
    ) -> Result<Uuid, ClientError> {
        let url = self.configuration_url(merchant_id)?;

        let resp = self.http.post(url).json(request).send().await?;

        let response: MerchantConfigurationResponse = parse_response(resp).await?;
        Ok(response.merchant_configuration_id)
    }

    /// `GET /merchants/{merchant_id}/configuration` – fetch the current
    /// configuration of a merchant.
    pub async fn get_configuration(
        &self,
        merchant_id: &str,
    ) -> Result<MerchantConfigurationView, ClientError> {
        let url = self.configuration_url(merchant_id)?;

        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }

    fn configuration_url(&self, merchant_id: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["merchants", merchant_id, "configuration"]);
        Ok(url)
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(match serde_json::from_str::<FieldError>(&body) {
            Ok(error) => ClientError::Rejected { status, error },
            Err(_) => ClientError::Api { status, body },
        });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
