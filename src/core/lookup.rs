use crate::core::query::SearchQuery;
use crate::core::view_model::{self, CardDetail, CardSummary};
use crate::domain::ports::CardSource;
use crate::utils::error::{CardError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: SearchQuery,
    pub summaries: Vec<CardSummary>,
    pub total_cards: Option<u64>,
    pub rejected: usize,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// 把資料來源接到 view-model：一個動作一次請求
pub struct CardLookup<S: CardSource> {
    source: S,
}

impl<S: CardSource> CardLookup<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn search(&self, raw_input: &str) -> Result<SearchOutcome> {
        let query = SearchQuery::from_input(raw_input)?;
        tracing::info!("🔍 Searching for: {}", query);

        let page = self.source.search(&query).await?;
        if page.has_more {
            tracing::debug!(
                "More results available ({} total), showing first page only",
                page.total_cards.unwrap_or_default()
            );
        }

        let summaries: Vec<CardSummary> = page.cards.iter().map(view_model::build_summary).collect();
        let malformed = summaries.iter().filter(|s| s.malformed).count();
        tracing::info!(
            "Found {} cards ({} malformed, {} rejected)",
            summaries.len(),
            malformed,
            page.rejected
        );

        Ok(SearchOutcome {
            query,
            summaries,
            total_cards: page.total_cards,
            rejected: page.rejected,
        })
    }

    pub async fn detail(&self, id: &str) -> Result<CardDetail> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CardError::ValidationError {
                message: "Card ID missing.".to_string(),
            });
        }

        tracing::info!("📇 Loading card details for: {}", id);
        let card = self.source.card(id).await?;
        Ok(view_model::build_detail(&card))
    }
}
