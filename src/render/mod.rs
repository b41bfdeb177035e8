pub mod html;
pub mod text;

use crate::core::face::FaceSide;
use crate::core::lookup::SearchOutcome;
use crate::core::view_model::{CardDetail, CardSummary};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Serialize)]
struct SearchView<'a> {
    query: &'a str,
    total_cards: Option<u64>,
    rejected: usize,
    cards: &'a [CardSummary],
}

#[derive(Serialize)]
struct DetailView<'a> {
    showing: FaceSide,
    #[serde(flatten)]
    detail: &'a CardDetail,
}

pub fn render_search(outcome: &SearchOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::search(outcome)),
        OutputFormat::Html => Ok(html::search(outcome)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SearchView {
            query: outcome.query.as_str(),
            total_cards: outcome.total_cards,
            rejected: outcome.rejected,
            cards: &outcome.summaries,
        })?),
    }
}

pub fn render_detail(detail: &CardDetail, side: FaceSide, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::detail(detail, side)),
        OutputFormat::Html => Ok(html::detail(detail, side)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&DetailView {
            showing: side,
            detail,
        })?),
    }
}
