pub mod settings;

#[cfg(feature = "cli")]
pub mod cli;

pub use settings::EngineSettings;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
