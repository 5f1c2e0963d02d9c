// Adapters layer: concrete implementations for external systems. Currently
// just the Gemini provider; other providers implement `TextGenerator` here.

pub mod gemini;

pub use gemini::GeminiClient;
