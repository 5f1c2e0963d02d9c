#[cfg(feature = "cli")]
pub mod cli;
pub mod provider;

pub use provider::ProviderConfig;
