pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, IntentCommand};

pub use crate::adapters::GeminiClient;
pub use crate::config::ProviderConfig;
pub use crate::core::assistant::Assistant;
pub use crate::domain::model::{Intent, NegotiationContext, Reply};
pub use crate::domain::ports::TextGenerator;
pub use crate::utils::error::{MandiError, Result};
