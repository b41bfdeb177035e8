use crate::core::query::SearchQuery;
use crate::domain::model::{Card, SearchPage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 卡牌資料來源：每個使用者動作發出一次請求，不重試
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage>;
    async fn card(&self, id: &str) -> Result<Card>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
