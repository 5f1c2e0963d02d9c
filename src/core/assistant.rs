use crate::core::{fallback, languages, postprocess, prompts};
use crate::domain::model::{NegotiationContext, Reply, TranslationJob};
use crate::domain::ports::TextGenerator;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_non_empty_text};

/// Maximum accepted length for translation input, in characters.
pub const MAX_TEXT_CHARS: usize = 2000;

/// The multilingual market assistant.
///
/// Generic over the [`TextGenerator`] port so production wires in the Gemini
/// adapter and tests wire in doubles. Holds no mutable state: the catalog and
/// templates are process-wide constants, so one instance serves any number of
/// concurrent calls.
///
/// Every operation follows the same two-step contract: validation errors
/// surface as `Err`, provider failures never do. Once validation passes the
/// caller always gets a non-empty [`Reply`], degraded to a canned string when
/// the provider is unreachable.
pub struct Assistant<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Translates `text` into `target_language`.
    ///
    /// An unknown target returns the `[Unsupported language: ...]` placeholder
    /// without touching the provider; a provider failure returns
    /// `[Translation failed] <text>`.
    pub async fn translate(&self, text: &str, target_language: &str) -> Result<Reply> {
        validate_non_empty_text("text", text)?;
        validate_max_length("text", text, MAX_TEXT_CHARS)?;

        let Some(target) = languages::lookup(target_language) else {
            return Ok(Reply::Success(format!(
                "[Unsupported language: {}]",
                target_language
            )));
        };

        let job = TranslationJob {
            source_text: text.to_string(),
            target_language: target_language.to_string(),
        };
        let prompt = prompts::translate_prompt(&job, target);

        match self.generator.generate(&prompt).await {
            Ok(raw) => Ok(Reply::Success(postprocess::clean(&raw))),
            Err(e) if e.is_provider_failure() => {
                tracing::warn!("Translation degraded to fallback: {}", e);
                Ok(Reply::Degraded {
                    text: fallback::translation_fallback(text),
                    cause: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Fair-price verdict plus a ready-to-use bargaining line and one tip, in
    /// the requested language style.
    pub async fn negotiate(&self, ctx: &NegotiationContext) -> Result<Reply> {
        validate_non_empty_text("item", &ctx.item)?;

        let prompt = prompts::negotiation_prompt(ctx);
        match self.generator.generate(&prompt).await {
            Ok(raw) => Ok(Reply::Success(raw.trim().to_string())),
            Err(e) if e.is_provider_failure() => {
                tracing::warn!("Negotiation advice degraded to fallback: {}", e);
                Ok(Reply::Degraded {
                    text: fallback::negotiation_fallback(&ctx.language).to_string(),
                    cause: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Names the language of `text`. The result is always a catalog entry:
    /// the model's reply is matched against the catalog in order and the
    /// first hit wins; no hit, or a provider failure, yields the default.
    pub async fn detect_language(&self, text: &str) -> Result<Reply> {
        validate_non_empty_text("text", text)?;

        let prompt = prompts::detect_language_prompt(text);
        match self.generator.generate(&prompt).await {
            Ok(raw) => {
                let reply = raw.to_lowercase();
                let detected = languages::SUPPORTED_LANGUAGES
                    .iter()
                    .find(|lang| reply.contains(&lang.name.to_lowercase()))
                    .map(|lang| lang.name)
                    .unwrap_or(languages::DEFAULT_LANGUAGE);
                Ok(Reply::Success(detected.to_string()))
            }
            Err(e) if e.is_provider_failure() => {
                tracing::warn!("Language detection degraded to default: {}", e);
                Ok(Reply::Degraded {
                    text: fallback::detection_fallback().to_string(),
                    cause: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Price range, seasonality, and one buying tip for `item`.
    pub async fn price_insight(&self, item: &str, location: &str) -> Result<Reply> {
        validate_non_empty_text("item", item)?;

        let prompt = prompts::price_insight_prompt(item, location);
        match self.generator.generate(&prompt).await {
            Ok(raw) => Ok(Reply::Success(raw.trim().to_string())),
            Err(e) if e.is_provider_failure() => {
                tracing::warn!("Price insight degraded to fallback: {}", e);
                Ok(Reply::Degraded {
                    text: fallback::price_insight_fallback().to_string(),
                    cause: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Free-form market question, answered in the requested language.
    pub async fn chat(&self, message: &str, language: &str) -> Result<Reply> {
        validate_non_empty_text("message", message)?;

        let prompt = prompts::chat_prompt(message, language);
        match self.generator.generate(&prompt).await {
            Ok(raw) => Ok(Reply::Success(raw.trim().to_string())),
            Err(e) if e.is_provider_failure() => {
                tracing::warn!("Chat degraded to fallback: {}", e);
                Ok(Reply::Degraded {
                    text: fallback::chat_fallback().to_string(),
                    cause: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Three ready-to-use bargaining phrases for `item`.
    pub async fn smart_phrases(&self, item: &str, context: &str, language: &str) -> Result<Reply> {
        validate_non_empty_text("item", item)?;

        let prompt = prompts::smart_phrases_prompt(item, context, language);
        match self.generator.generate(&prompt).await {
            Ok(raw) => Ok(Reply::Success(raw.trim().to_string())),
            Err(e) if e.is_provider_failure() => {
                tracing::warn!("Smart phrases degraded to fallback: {}", e);
                Ok(Reply::Degraded {
                    text: fallback::smart_phrases_fallback(language).to_string(),
                    cause: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }
}
