pub mod assistant;
pub mod fallback;
pub mod languages;
pub mod postprocess;
pub mod prompts;

pub use crate::domain::model::{Intent, NegotiationContext, Reply, SupportedLanguage};
pub use crate::domain::ports::TextGenerator;
pub use crate::utils::error::Result;
