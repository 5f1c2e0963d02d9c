//! Prompt construction for each assistant intent.
//!
//! Every builder returns the full instruction string sent to the provider.
//! The templates are data: word caps, formatting rules, and per-language
//! style blocks all live here, not in the calling code.

use crate::core::languages::{self, SUPPORTED_LANGUAGES};
use crate::domain::model::{NegotiationContext, SupportedLanguage, TranslationJob};

pub fn translate_prompt(job: &TranslationJob, target: SupportedLanguage) -> String {
    format!(
        "You are an expert translator specializing in Indian regional languages for market/trade contexts.\n\
\n\
Translate the following text accurately to {target} ({native}).\n\
\n\
CRITICAL RULES:\n\
1. Output ONLY the translated text - no explanations, no quotes, no prefixes\n\
2. Preserve the original meaning, tone, and intent precisely\n\
3. Use natural, conversational language as spoken by native speakers in markets\n\
4. Keep numbers as numerals (don't spell them out)\n\
5. For market/trade terms, use commonly understood local vocabulary\n\
6. If the text contains greetings, translate culturally (e.g., \"Hello\" -> \"नमस्ते\" in Hindi)\n\
7. Maintain any pricing format (₹50/kg stays as ₹50/kg with translated unit if needed)\n\
\n\
Text to translate:\n\
{text}",
        target = target.name,
        native = target.native_label,
        text = job.source_text,
    )
}

pub fn negotiation_prompt(ctx: &NegotiationContext) -> String {
    let market_reference = if ctx.uses_standard_reference() {
        "Use your knowledge of typical Indian market prices for this item".to_string()
    } else {
        ctx.market_reference.clone()
    };

    format!(
        "You are a friendly, street-smart market expert helping with price negotiations at an Indian mandi (local vegetable/fruit market).\n\
\n\
SCENARIO:\n\
- Item: {item}\n\
- Vendor's asking price: {price}\n\
- Market reference: {market_reference}\n\
\n\
{style}\n\
\n\
Provide PRACTICAL negotiation advice:\n\
1. Quick verdict: Is this price fair, slightly high, or overpriced? (1 line)\n\
2. A ready-to-use negotiation phrase the buyer can say directly to the vendor (make it natural!)\n\
3. One smart tip (bulk discount, quality check, timing, etc.)\n\
\n\
STYLE:\n\
- Keep it under 80 words total\n\
- Be warm and friendly, like advice from a helpful neighbor\n\
- NO markdown, NO bullet points, NO asterisks\n\
- Write as flowing text, like someone speaking\n\
- Remember: respectful bargaining is an art form in Indian markets!",
        item = ctx.item,
        price = ctx.vendor_price,
        style = languages::negotiation_style(&ctx.language),
    )
}

pub fn detect_language_prompt(text: &str) -> String {
    let names: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.name).collect();
    format!(
        "Identify the language of this text.\n\
Respond with ONLY ONE word - the language name from this exact list:\n\
{names}\n\
\n\
Just the language name, nothing else. No punctuation.\n\
\n\
Text: {text}",
        names = names.join(", "),
    )
}

pub fn price_insight_prompt(item: &str, location: &str) -> String {
    format!(
        "You are a market analyst expert for Indian agricultural markets and mandis.\n\
\n\
For the item \"{item}\" in {location} markets (current season):\n\
\n\
1. What's the typical retail price range per kg?\n\
2. Is it currently in season or off-season?\n\
3. One insider buying tip for getting the best deal\n\
\n\
Keep response under 60 words, conversational tone.\n\
No markdown formatting.\n\
If you're unsure about exact prices, give a reasonable estimate based on typical Indian market prices."
    )
}

pub fn chat_prompt(message: &str, language: &str) -> String {
    format!(
        "You are a helpful AI assistant for Indian market vendors and buyers at local mandis (vegetable/fruit markets).\n\
\n\
{instruction}\n\
\n\
You can help with:\n\
- Market prices and trends\n\
- Negotiation tips\n\
- Quality assessment of produce\n\
- Storage and handling tips\n\
- Best time to buy/sell\n\
- Market locations and timings\n\
- Any other market-related questions\n\
\n\
User's question: {message}\n\
\n\
Provide a helpful, practical response. Keep it under 100 words.\n\
Be friendly and conversational, like a knowledgeable friend who works in the market.\n\
No markdown formatting.",
        instruction = reply_language_instruction(language, "Respond"),
    )
}

pub fn smart_phrases_prompt(item: &str, context: &str, language: &str) -> String {
    format!(
        "Generate 3 natural, ready-to-use bargaining phrases for buying {item} at an Indian mandi.\n\
\n\
Context: {context}\n\
{instruction}\n\
\n\
Format: Just list the 3 phrases, one per line.\n\
Make them sound natural - like what a local would actually say.\n\
Include the warm, respectful tone typical of Indian market interactions.\n\
No numbering, no explanations, just the phrases.",
        instruction = reply_language_instruction(language, "Generate phrases"),
    )
}

/// Shared language selector for chat and smart-phrases: Hinglish gets its own
/// Roman-script instruction, catalog languages other than English get their
/// native script, anything else falls back to plain English.
fn reply_language_instruction(language: &str, verb: &str) -> String {
    if language == "Hinglish" {
        return format!("{verb} in Hinglish (natural mix of Hindi and English in Roman script).");
    }
    match languages::lookup(language) {
        Some(lang) if lang.name != "English" => {
            format!("{verb} in {} using {} script.", lang.name, lang.native_label)
        }
        _ => format!("{verb} in simple, friendly English."),
    }
}
