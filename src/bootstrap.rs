use anyhow::{Context, Result};

use crate::{catalog::seed::modapts_motions, config::AppConfig, db::Database, AppState};

const ENABLE_LOGS: bool = true;

/// Insert the MODAPTS table when the catalog is empty. Returns how many
/// motions were inserted; 0 means the catalog was already populated.
pub async fn seed_catalog(db: &Database) -> Result<usize> {
    let inserted = db
        .bulk_load_motions_if_empty(modapts_motions())
        .await
        .context("failed to seed motion catalog")?;

    if inserted > 0 {
        crate::log_info!("Seeded {} motion codes", inserted);
    } else {
        crate::log_info!("Motion catalog already populated; skipping seed");
    }

    Ok(inserted)
}

/// Open the store and seed it. Must complete before any command is served.
pub async fn initialize(config: AppConfig) -> Result<AppState> {
    let db = Database::new(config.database_path.clone())?;
    seed_catalog(&db).await?;

    Ok(AppState { db, config })
}
