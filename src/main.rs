use clap::Parser;
use mandi_assist::utils::{logger, validation::Validate};
use mandi_assist::{
    Assistant, CliConfig, GeminiClient, Intent, IntentCommand, NegotiationContext, Reply,
};

/// JSON field name each intent result is published under, mirroring the
/// fields the web frontends consume.
fn json_field(intent: Intent) -> &'static str {
    match intent {
        Intent::Translate => "translated_text",
        Intent::Negotiate => "advice",
        Intent::DetectLanguage => "detected_language",
        Intent::PriceInsight => "insight",
        Intent::Chat => "response",
        Intent::SmartPhrases => "phrases",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mandi-assist CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let provider = match config.provider_config() {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("❌ Failed to load provider config: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = provider.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let generator = GeminiClient::new(&provider)?;
    let assistant = Assistant::new(generator);

    let (intent, result) = match &config.command {
        IntentCommand::Translate { text, to } => {
            (Intent::Translate, assistant.translate(text, to).await)
        }
        IntentCommand::Negotiate {
            item,
            vendor_price,
            market_price,
            language,
        } => {
            let ctx = NegotiationContext {
                item: item.clone(),
                vendor_price: vendor_price.clone(),
                market_reference: market_price.clone(),
                language: language.clone(),
            };
            (Intent::Negotiate, assistant.negotiate(&ctx).await)
        }
        IntentCommand::DetectLanguage { text } => {
            (Intent::DetectLanguage, assistant.detect_language(text).await)
        }
        IntentCommand::PriceInsight { item, location } => (
            Intent::PriceInsight,
            assistant.price_insight(item, location).await,
        ),
        IntentCommand::Chat { message, language } => {
            (Intent::Chat, assistant.chat(message, language).await)
        }
        IntentCommand::SmartPhrases {
            item,
            context,
            language,
        } => (
            Intent::SmartPhrases,
            assistant.smart_phrases(item, context, language).await,
        ),
    };

    match result {
        Ok(reply) => {
            if let Reply::Degraded { cause, .. } = &reply {
                tracing::warn!(
                    "⚠️ Provider unavailable for {}, served fallback ({})",
                    intent.as_str(),
                    cause
                );
            }
            if config.json {
                let mut body = serde_json::Map::new();
                body.insert(
                    json_field(intent).to_string(),
                    serde_json::Value::String(reply.text().to_string()),
                );
                body.insert(
                    "degraded".to_string(),
                    serde_json::Value::Bool(reply.is_degraded()),
                );
                let body = serde_json::Value::Object(body);
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", reply.text());
            }
        }
        Err(e) => {
            tracing::error!("❌ Request rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
