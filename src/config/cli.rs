use crate::config::provider::ProviderConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "mandi-assist")]
#[command(about = "AI market assistant for Indian mandis")]
pub struct CliConfig {
    /// Path to a TOML provider config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the provider endpoint (useful against a local mock)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Override the model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Emit the result as a JSON object instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: IntentCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum IntentCommand {
    /// Translate text into a supported regional language
    Translate {
        text: String,
        #[arg(long, default_value = "Hindi")]
        to: String,
    },
    /// Get fair-price negotiation advice for an item
    Negotiate {
        item: String,
        #[arg(long)]
        vendor_price: String,
        #[arg(long, default_value = "standard")]
        market_price: String,
        #[arg(long, default_value = "Hinglish")]
        language: String,
    },
    /// Detect which supported language a text is written in
    DetectLanguage { text: String },
    /// Get price range, seasonality, and a buying tip for an item
    PriceInsight {
        item: String,
        #[arg(long, default_value = "India")]
        location: String,
    },
    /// Ask the market assistant a free-form question
    Chat {
        message: String,
        #[arg(long, default_value = "Hinglish")]
        language: String,
    },
    /// Generate three ready-to-use bargaining phrases
    SmartPhrases {
        item: String,
        #[arg(long, default_value = "general negotiation")]
        context: String,
        #[arg(long, default_value = "Hinglish")]
        language: String,
    },
}

impl CliConfig {
    /// Provider settings: config file (or defaults) with CLI overrides on top.
    pub fn provider_config(&self) -> Result<ProviderConfig> {
        let mut provider = match &self.config {
            Some(path) => ProviderConfig::from_file(path)?,
            None => ProviderConfig::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            provider.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            provider.model = model.clone();
        }
        Ok(provider)
    }
}
