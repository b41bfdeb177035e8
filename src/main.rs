use card_lookup::core::ConfigProvider;
use card_lookup::render::{render_detail, render_search};
use card_lookup::utils::error::ErrorSeverity;
use card_lookup::utils::{logger, validation::Validate};
use card_lookup::{
    CardError, CardLookup, CliConfig, Command, FaceSide, OutputFormat, ScryfallClient, TomlConfig,
};
use clap::Parser;

/// 依設定來源建立客戶端與輸出格式
fn build_client(config: &CliConfig) -> Result<(ScryfallClient, OutputFormat), CardError> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            let format = config
                .format
                .or(file_config.output_format())
                .unwrap_or_default();
            Ok((ScryfallClient::new(&file_config)?, format))
        }
        None => {
            config.validate()?;
            tracing::debug!(
                "Using API {} with {:?} timeout",
                config.api_base_url(),
                config.request_timeout()
            );
            Ok((ScryfallClient::new(config)?, config.format.unwrap_or_default()))
        }
    }
}

async fn run(config: &CliConfig) -> Result<String, CardError> {
    let (client, format) = build_client(config)?;
    let lookup = CardLookup::new(client);

    match &config.command {
        Command::Search { query } => {
            let outcome = lookup.search(&query.join(" ")).await?;
            render_search(&outcome, format)
        }
        Command::Show { id, back } => {
            let side = if *back { FaceSide::Back } else { FaceSide::Front };
            let detail = lookup.detail(id).await?;
            if *back && !detail.is_dual_display {
                tracing::warn!("{} has a single image, ignoring --back", detail.name);
            }
            render_detail(&detail, side, format)
        }
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(rendered) => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 2,
                ErrorSeverity::Medium => 3,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 4,
            };
            std::process::exit(exit_code);
        }
    }
}
