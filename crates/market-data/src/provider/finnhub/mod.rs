//! Finnhub news provider implementation.
//!
//! This module fetches company news from the Finnhub `/company-news`
//! endpoint. Items are returned exactly as Finnhub sends them.
//!
//! Finnhub free tier is limited to 60 API calls per minute.
//! API documentation: https://finnhub.io/docs/api/company-news

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::NewsItem;
use crate::provider::NewsProvider;

const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER_ID: &str = "FINNHUB";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error response from Finnhub
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Finnhub company-news provider.
pub struct FinnhubProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubProvider {
    /// Create a new Finnhub provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(30))
    }

    /// Create a provider whose HTTP client gives up after `timeout`.
    pub fn with_timeout(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Make a GET request to the Finnhub API.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("Finnhub request: {} with {} params", endpoint, params.len());

        let response = self
            .client
            .get(&url)
            .header("X-Finnhub-Token", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::from(e)
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MarketDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            });
        }

        // Finnhub answers 403 when the key's quota is exhausted
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Ok(ErrorResponse {
                error: Some(error_msg),
            }) = serde_json::from_str::<ErrorResponse>(&body)
            {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: error_msg,
                });
            }

            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl NewsProvider for FinnhubProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NewsItem>, MarketDataError> {
        let from = from.format(DATE_FORMAT).to_string();
        let to = to.format(DATE_FORMAT).to_string();

        debug!("Fetching news for {} from {} to {} from Finnhub", symbol, from, to);

        let params = [("symbol", symbol), ("from", from.as_str()), ("to", to.as_str())];
        let text = self.fetch("/company-news", &params).await?;

        parse_company_news(&text)
    }
}

/// Parse a `/company-news` body into items, keeping provider order.
fn parse_company_news(text: &str) -> Result<Vec<NewsItem>, MarketDataError> {
    let value: Value = serde_json::from_str(text).map_err(|e| MarketDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: format!("Failed to parse news response: {}", e),
    })?;

    match value {
        Value::Array(items) => Ok(items.into_iter().map(NewsItem::new).collect()),
        Value::Object(ref map) => match map.get("error").and_then(Value::as_str) {
            Some(error_msg) => Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: error_msg.to_string(),
            }),
            None => Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: "Expected a JSON array of news items".to_string(),
            }),
        },
        _ => Err(MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: "Expected a JSON array of news items".to_string(),
        }),
    }
}
