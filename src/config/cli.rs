use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_amount, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rigmatch")]
#[command(about = "PC build recommendations from a budget and a use case")]
pub struct CliConfig {
    /// Directory holding one CSV catalog per component category
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Total budget for the build
    #[arg(long, default_value = "1000")]
    pub budget: f64,

    /// Use case driving the budget split (gaming, general, work, school)
    #[arg(long, default_value = "gaming")]
    pub use_case: String,

    /// CPU requirement text, e.g. "Intel Core i5-9400F or AMD equivalent"
    #[arg(long, default_value = "Unknown")]
    pub cpu: String,

    /// GPU requirement text
    #[arg(long, default_value = "Unknown")]
    pub gpu: String,

    /// RAM requirement text, e.g. "16 GB"
    #[arg(long, default_value = "Unknown")]
    pub ram: String,

    /// Optional TOML file overriding engine tunables
    #[arg(long)]
    pub settings: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_positive_amount("budget", self.budget)?;
        if let Some(settings) = &self.settings {
            validate_path("settings", settings)?;
        }
        Ok(())
    }
}
