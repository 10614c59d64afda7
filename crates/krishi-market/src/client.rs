//! Open government dataset client.

use std::time::Duration;

use tracing::instrument;

use crate::error::MarketError;
use crate::fallback::fallback_rows;
use crate::types::{DatasetResponse, MarketData, MarketRecord};

const DEFAULT_BASE_URL: &str = "https://api.data.gov.in";
/// Daily mandi prices resource (Directorate of Marketing & Inspection).
const PRICES_RESOURCE: &str = "9ef84268-d588-465a-a308-a864a43d0070";
const PAGE_SIZE: usize = 20;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct MarketClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MarketClient {
    pub fn new(api_key: &str) -> Result<Self, MarketError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint (config override, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch price rows for a state, optionally narrowed to one commodity.
    ///
    /// Never fails: transport errors, bad statuses and empty result sets all
    /// degrade to the embedded table. Search and sorting over the returned
    /// rows belong to the caller (see [`crate::filter`]).
    #[instrument(skip(self), level = "info")]
    pub async fn query(&self, state: &str, commodity: Option<&str>) -> MarketData {
        match self.fetch_live(state, commodity).await {
            Ok(records) if !records.is_empty() => MarketData::Live(records),
            Ok(_) => {
                tracing::debug!("Dataset returned no records, using fallback table");
                MarketData::Fallback(fallback_rows().to_vec())
            }
            Err(e) => {
                tracing::warn!("Dataset fetch failed ({e}), using fallback table");
                MarketData::Fallback(fallback_rows().to_vec())
            }
        }
    }

    async fn fetch_live(
        &self,
        state: &str,
        commodity: Option<&str>,
    ) -> Result<Vec<MarketRecord>, MarketError> {
        let url = format!("{}/resource/{}", self.base_url, PRICES_RESOURCE);

        let limit = PAGE_SIZE.to_string();
        let mut params = vec![
            ("api-key", self.api_key.as_str()),
            ("format", "json"),
            ("limit", limit.as_str()),
            ("filters[state]", state),
        ];
        if let Some(commodity) = commodity {
            params.push(("filters[commodity]", commodity));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(MarketError::from_send)?;

        if !response.status().is_success() {
            return Err(MarketError::Unavailable {
                status: response.status().as_u16(),
            });
        }

        let data: DatasetResponse = response
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        Ok(data.records)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> MarketClient {
        MarketClient::new("test_key")
            .unwrap()
            .with_base_url(server.uri())
    }

    fn resource_path() -> String {
        format!("/resource/{}", PRICES_RESOURCE)
    }

    #[tokio::test]
    async fn test_live_rows_pass_through_unmodified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(resource_path()))
            .and(query_param("filters[state]", "Maharashtra"))
            .and(query_param("filters[commodity]", "Tomato"))
            .and(query_param("limit", "20"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "records": [
                    {"commodity": "Tomato", "variety": "Local", "market": "Pune",
                     "state": "Maharashtra", "min_price": "900", "max_price": "1400",
                     "modal_price": "1150", "arrival_date": "19/02/2026"},
                    {"commodity": "Tomato", "variety": "Hybrid", "market": "Nagpur",
                     "state": "Maharashtra", "min_price": "850", "max_price": "1300",
                     "modal_price": "1100", "arrival_date": "19/02/2026"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let data = client(&mock_server)
            .query("Maharashtra", Some("Tomato"))
            .await;

        assert!(!data.is_fallback());
        let records = data.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].market, "Pune");
        assert_eq!(records[1].modal_price, "1100");
    }

    #[tokio::test]
    async fn test_empty_result_yields_fallback_table() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(resource_path()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"records": []})),
            )
            .mount(&mock_server)
            .await;

        let data = client(&mock_server)
            .query("Maharashtra", Some("Tomato"))
            .await;

        assert!(data.is_fallback());
        let records = data.into_records();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].commodity, "Wheat");
    }

    #[tokio::test]
    async fn test_server_error_yields_fallback_table() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(resource_path()))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let data = client(&mock_server).query("Punjab", None).await;
        assert!(data.is_fallback());
        assert_eq!(data.records().len(), 10);
    }

    #[tokio::test]
    async fn test_garbled_body_yields_fallback_table() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(resource_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let data = client(&mock_server).query("Punjab", None).await;
        assert!(data.is_fallback());
    }

    #[tokio::test]
    async fn test_commodity_filter_is_optional() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(resource_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "records": [{"commodity": "Onion", "state": "Maharashtra"}]
            })))
            .mount(&mock_server)
            .await;

        client(&mock_server).query("Maharashtra", None).await;

        let requests = mock_server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default();
        assert!(!query.contains("commodity"));
    }
}
