use serde::{Deserialize, Serialize};

/// A language the assistant can translate into, with its native-script label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub name: &'static str,
    pub native_label: &'static str,
}

/// The six operations the assistant exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Translate,
    Negotiate,
    DetectLanguage,
    PriceInsight,
    Chat,
    SmartPhrases,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Translate => "translate",
            Intent::Negotiate => "negotiate",
            Intent::DetectLanguage => "detect-language",
            Intent::PriceInsight => "price-insight",
            Intent::Chat => "chat",
            Intent::SmartPhrases => "smart-phrases",
        }
    }
}

/// One translation request. Built per call, never stored.
#[derive(Debug, Clone)]
pub struct TranslationJob {
    pub source_text: String,
    pub target_language: String,
}

/// Inputs for a negotiation-advice request.
#[derive(Debug, Clone)]
pub struct NegotiationContext {
    pub item: String,
    pub vendor_price: String,
    /// Either a concrete reference price or the literal "standard", which asks
    /// the model to lean on general market knowledge.
    pub market_reference: String,
    pub language: String,
}

impl NegotiationContext {
    pub fn uses_standard_reference(&self) -> bool {
        self.market_reference == "standard"
    }
}

/// Outcome of one assistant operation. A `Degraded` reply still carries a
/// usable string; the cause records why the provider reply was substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success(String),
    Degraded { text: String, cause: String },
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Success(text) => text,
            Reply::Degraded { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Reply::Success(text) => text,
            Reply::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Reply::Degraded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_accessors() {
        let ok = Reply::Success("ठीक है".to_string());
        assert_eq!(ok.text(), "ठीक है");
        assert!(!ok.is_degraded());

        let degraded = Reply::Degraded {
            text: "fallback".to_string(),
            cause: "timeout".to_string(),
        };
        assert_eq!(degraded.text(), "fallback");
        assert!(degraded.is_degraded());
    }

    #[test]
    fn test_standard_market_reference() {
        let ctx = NegotiationContext {
            item: "tomato".to_string(),
            vendor_price: "₹50/kg".to_string(),
            market_reference: "standard".to_string(),
            language: "Hinglish".to_string(),
        };
        assert!(ctx.uses_standard_reference());
    }
}
