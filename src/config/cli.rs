use crate::adapters::http::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "card-lookup")]
#[command(about = "Look up trading cards from the Scryfall API")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, global = true, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output format (defaults to the config file setting, then text)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file; replaces the API flags above
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search cards by name or with a structured query (e.g. "cmc>=5")
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show a single card by id
    Show {
        id: String,

        /// Show the back face of a double-faced card
        #[arg(long)]
        back: bool,
    },
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
