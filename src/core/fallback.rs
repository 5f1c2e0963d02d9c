//! Canned replies used when the provider cannot be reached.
//!
//! Every intent has a non-empty local substitute so a provider outage never
//! reaches the caller as an error. The strings are fixed product copy; keep
//! them byte-for-byte stable, the frontends display them as-is.

use crate::core::languages::DEFAULT_LANGUAGE;

pub fn translation_fallback(source_text: &str) -> String {
    format!("[Translation failed] {}", source_text)
}

pub fn negotiation_fallback(language: &str) -> &'static str {
    match language {
        "Hindi" => {
            "भाई साहब, थोड़ा कम कर दीजिए। बाज़ार में देखकर आया हूँ, ₹10-15 कम में मिल रहा है। रोज़ का ग्राहक बनूँगा! 🙏"
        }
        "Tamil" => "அண்ணா, கொஞ்சம் குறைங்க. தினமும் வாங்குவேன். நல்ல விலைக்கு கொடுங்க! 🙏",
        _ => {
            "Bhaiya, thoda kam kar do na. Market mein dekh ke aaya hoon, ₹10-15 kam mein mil raha hai. Regular customer ban jayenge! 🙏"
        }
    }
}

pub fn detection_fallback() -> &'static str {
    DEFAULT_LANGUAGE
}

pub fn price_insight_fallback() -> &'static str {
    "Price data temporarily unavailable. Generally, buy seasonal produce in the morning for freshest quality and best prices!"
}

pub fn chat_fallback() -> &'static str {
    "Sorry, I couldn't process that. Please try asking again!"
}

pub fn smart_phrases_fallback(language: &str) -> &'static str {
    if language == "Hinglish" {
        "Bhaiya, aaj rate kya hai? Thoda fresh wala dikhao na.\nItna mehnga? Woh saamne wale bhaiya se 5 rupaye kam mein mil raha hai!\nAccha chal, 2 kg le leta hoon, thoda discount dedo na?"
    } else {
        "What's today's rate? Show me something fresh please.\nThat seems a bit high, I saw it cheaper at the next stall.\nOkay, I'll take 2 kg, can you give a small discount?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiation_fallback_by_language() {
        assert!(negotiation_fallback("Hindi").contains("भाई साहब"));
        assert!(negotiation_fallback("Tamil").contains("அண்ணா"));
        // Everything else gets the Hinglish string, including unknowns.
        assert!(negotiation_fallback("Hinglish").contains("Bhaiya, thoda kam kar do na"));
        assert!(negotiation_fallback("Gujarati").contains("Bhaiya, thoda kam kar do na"));
    }

    #[test]
    fn test_smart_phrases_fallback_has_three_lines() {
        assert_eq!(smart_phrases_fallback("Hinglish").lines().count(), 3);
        assert_eq!(smart_phrases_fallback("English").lines().count(), 3);
    }

    #[test]
    fn test_all_fallbacks_non_empty() {
        assert!(!translation_fallback("hello").is_empty());
        assert!(!detection_fallback().is_empty());
        assert!(!price_insight_fallback().is_empty());
        assert!(!chat_fallback().is_empty());
    }

    #[test]
    fn test_translation_fallback_echoes_source() {
        assert_eq!(translation_fallback("Hello"), "[Translation failed] Hello");
    }
}
