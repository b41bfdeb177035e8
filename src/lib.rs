pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::ScryfallClient;
pub use config::TomlConfig;
pub use core::face::FaceSide;
pub use core::lookup::{CardLookup, SearchOutcome};
pub use core::query::SearchQuery;
pub use core::view_model::{build_detail, build_summary, CardDetail, CardSummary};
pub use render::OutputFormat;
pub use utils::error::{CardError, Result};
