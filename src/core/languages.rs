use crate::domain::model::SupportedLanguage;

/// Languages the assistant can translate into, with their native-script
/// labels. Catalog order matters: language detection returns the first
/// catalog entry found in the model's reply.
pub const SUPPORTED_LANGUAGES: [SupportedLanguage; 9] = [
    SupportedLanguage {
        name: "Hindi",
        native_label: "हिंदी",
    },
    SupportedLanguage {
        name: "Tamil",
        native_label: "தமிழ்",
    },
    SupportedLanguage {
        name: "Telugu",
        native_label: "తెలుగు",
    },
    SupportedLanguage {
        name: "Bengali",
        native_label: "বাংলা",
    },
    SupportedLanguage {
        name: "Marathi",
        native_label: "मराठी",
    },
    SupportedLanguage {
        name: "Kannada",
        native_label: "ಕನ್ನಡ",
    },
    SupportedLanguage {
        name: "Gujarati",
        native_label: "ગુજરાતી",
    },
    SupportedLanguage {
        name: "Punjabi",
        native_label: "ਪੰਜਾਬੀ",
    },
    SupportedLanguage {
        name: "English",
        native_label: "English",
    },
];

/// Language detection falls back to this when the model's answer matches
/// nothing in the catalog or the provider is unreachable.
pub const DEFAULT_LANGUAGE: &str = "Hindi";

pub fn lookup(name: &str) -> Option<SupportedLanguage> {
    SUPPORTED_LANGUAGES.iter().copied().find(|l| l.name == name)
}

pub fn is_supported(name: &str) -> bool {
    lookup(name).is_some()
}

/// Per-language response style for negotiation advice. "Hinglish" is a style,
/// not a catalog language: it has no script of its own, so it lives here and
/// not in `SUPPORTED_LANGUAGES`.
#[derive(Debug, Clone, Copy)]
pub struct NegotiationStyle {
    pub language: &'static str,
    pub instruction: &'static str,
}

pub const NEGOTIATION_STYLES: [NegotiationStyle; 9] = [
    NegotiationStyle {
        language: "Hinglish",
        instruction: "Respond in Hinglish (natural mix of Hindi and English, written in Roman script).\nUse words like 'bhaiya', 'accha', 'thoda', 'aur', 'kya' naturally. Example: \"Bhaiya, thoda kam karo na, 50 rupaye dedo!\"",
    },
    NegotiationStyle {
        language: "Hindi",
        instruction: "Respond ENTIRELY in Hindi using Devanagari script (हिंदी).\nExample: \"भाई साहब, थोड़ा कम कर दीजिए, ५० रुपये में दे दीजिए!\"",
    },
    NegotiationStyle {
        language: "Tamil",
        instruction: "Respond ENTIRELY in Tamil using Tamil script (தமிழ்).\nUse respectful terms like 'அண்ணா' (anna) for vendor.",
    },
    NegotiationStyle {
        language: "Telugu",
        instruction: "Respond ENTIRELY in Telugu using Telugu script (తెలుగు).\nUse respectful terms like 'అన్నా' (anna) for vendor.",
    },
    NegotiationStyle {
        language: "Bengali",
        instruction: "Respond ENTIRELY in Bengali using Bengali script (বাংলা).\nUse respectful terms like 'দাদা' (dada) for vendor.",
    },
    NegotiationStyle {
        language: "Marathi",
        instruction: "Respond ENTIRELY in Marathi using Devanagari script (मराठी).\nUse respectful terms like 'भाऊ' (bhau) or 'दादा' (dada) for vendor.",
    },
    NegotiationStyle {
        language: "Kannada",
        instruction: "Respond ENTIRELY in Kannada using Kannada script (ಕನ್ನಡ).\nUse respectful terms like 'ಅಣ್ಣ' (anna) for vendor.",
    },
    NegotiationStyle {
        language: "Gujarati",
        instruction: "Respond ENTIRELY in Gujarati using Gujarati script (ગુજરાતી).\nUse respectful terms like 'ભાઈ' (bhai) for vendor.",
    },
    NegotiationStyle {
        language: "Punjabi",
        instruction: "Respond ENTIRELY in Punjabi using Gurmukhi script (ਪੰਜਾਬੀ).\nUse respectful terms like 'ਭਾਜੀ' (bhaji) or 'ਵੀਰੇ' (veere) for vendor.",
    },
];

pub const DEFAULT_NEGOTIATION_STYLE: &str =
    "Respond in simple, friendly English suitable for Indian markets.";

/// Style block for the given language, or the plain-English default.
pub fn negotiation_style(language: &str) -> &'static str {
    NEGOTIATION_STYLES
        .iter()
        .find(|s| s.language == language)
        .map(|s| s.instruction)
        .unwrap_or(DEFAULT_NEGOTIATION_STYLE)
}
