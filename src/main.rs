use clap::Parser;
use rigmatch::utils::{logger, validation::Validate};
use rigmatch::{
    get_budget_allocation, CliConfig, CsvCatalogProvider, Engine, EngineSettings,
    RequirementsRecord,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rigmatch CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match &config.settings {
        Some(path) => match EngineSettings::from_toml_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("❌ Failed to load settings file: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => EngineSettings::default(),
    };

    // Missing catalogs are fatal here, before any request is served.
    let provider = match CsvCatalogProvider::load(&config.data_dir) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("❌ Catalog loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("📦 Catalogs loaded from {}", config.data_dir);

    let engine = Engine::with_settings(provider, settings);
    let requirements =
        RequirementsRecord::new(config.cpu.clone(), config.gpu.clone(), config.ram.clone());

    let recommendation = engine.recommend(&requirements, config.budget, &config.use_case);
    let quote = engine.quote(&recommendation);

    tracing::info!("✅ Recommendation complete, total {:.2}", recommendation.total_cost);

    let response = serde_json::json!({
        "use_case": config.use_case,
        "budget_allocation": get_budget_allocation(&config.use_case),
        "recommended_build": quote,
        "total_cost": recommendation.total_cost,
    });
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
