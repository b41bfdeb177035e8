use crate::core::query::SearchQuery;
use crate::domain::model::{ApiErrorBody, Card, SearchPage};
use crate::domain::ports::{CardSource, ConfigProvider};
use crate::utils::error::{CardError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.scryfall.com";
pub const DEFAULT_USER_AGENT: &str = concat!("card-lookup/", env!("CARGO_PKG_VERSION"));

/// Scryfall 相容 API 的 HTTP 客戶端
pub struct ScryfallClient {
    base_url: Url,
    timeout: Duration,
    client: Client,
}

impl ScryfallClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = Url::parse(config.api_base_url()).map_err(|e| {
            CardError::InvalidConfigValueError {
                field: "api_base_url".to_string(),
                value: config.api_base_url().to_string(),
                reason: e.to_string(),
            }
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::ACCEPT,
                    header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            base_url,
            timeout: config.request_timeout(),
            client,
        })
    }

    /// `{base}/cards/search?q=...`，查詢字串在此才做 URL 編碼
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = self.endpoint(&["cards", "search"])?;
        url.query_pairs_mut().append_pair("q", query.as_str());
        Ok(url)
    }

    pub fn card_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&["cards", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CardError::ConfigError {
                message: format!("API base URL cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;
        tracing::debug!("API response status: {}", response.status());
        Ok(response)
    }

    fn classify_transport_error(&self, error: reqwest::Error) -> CardError {
        if error.is_timeout() {
            CardError::Timeout {
                seconds: self.timeout.as_secs().max(1),
            }
        } else {
            CardError::ApiError(error)
        }
    }

    async fn read_json(&self, response: Response) -> Result<serde_json::Value> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.classify_transport_error(e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// 把非 2xx 回應轉成對應的錯誤
async fn status_error(response: Response) -> CardError {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());
        return CardError::RateLimited { retry_after };
    }

    let body: ApiErrorBody = response.json().await.unwrap_or_default();
    CardError::HttpStatus {
        status: status.as_u16(),
        details: body
            .details
            .or(body.code)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string()),
    }
}

#[async_trait]
impl CardSource for ScryfallClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let response = self.get(self.search_url(query)?).await?;

        // 搜尋沒有結果時上游回 404，視為空結果
        if response.status() == StatusCode::NOT_FOUND {
            tracing::info!("No cards found for query: {}", query);
            return Ok(SearchPage::default());
        }
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let json = self.read_json(response).await?;
        Ok(SearchPage::from_json(json)?)
    }

    async fn card(&self, id: &str) -> Result<Card> {
        let response = self.get(self.card_url(id)?).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CardError::NotFound { id: id.to_string() });
        }
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let json = self.read_json(response).await?;
        Ok(serde_json::from_value(json)?)
    }
}
