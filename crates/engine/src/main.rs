//! Mods Optimizer Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modsopt_engine::infrastructure::{
    catalog::JsonCatalog, clock::SystemClock, config::EngineConfig,
};
use modsopt_engine::use_cases::RosterMigration;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modsopt_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mods Optimizer Engine");

    let config = EngineConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let catalog = Arc::new(JsonCatalog::load_or_empty(&config.catalog_path)?);
    let migration = RosterMigration::new(catalog, Arc::new(SystemClock::new()));

    let summary = migration.migrate_file(&config.roster_path, &config.output_path)?;
    tracing::info!(
        source_version = %summary.source_version,
        source_schema = ?summary.source_schema,
        characters = summary.characters,
        "Roster migration complete"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
