use std::path::PathBuf;

use anyhow::{bail, Result};

pub const DEFAULT_DATABASE_PATH: &str = "./openpts.db";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            debug: false,
        }
    }
}

impl AppConfig {
    /// An explicit path wins over `database_url`; with neither the default
    /// `./openpts.db` is used.
    pub fn resolve(
        database_path: Option<PathBuf>,
        database_url: Option<&str>,
        debug: bool,
    ) -> Result<Self> {
        let database_path = match (database_path, database_url) {
            (Some(path), _) => path,
            (None, Some(url)) => path_from_database_url(url)?,
            (None, None) => PathBuf::from(DEFAULT_DATABASE_PATH),
        };

        Ok(Self {
            database_path,
            debug: debug || debug_from_env(),
        })
    }
}

fn debug_from_env() -> bool {
    std::env::var("OPENPTS_DEBUG")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Accepts SQLAlchemy-style SQLite URLs: `sqlite:///relative.db`,
/// `sqlite:////absolute.db`, `sqlite://` (in-memory).
pub fn path_from_database_url(url: &str) -> Result<PathBuf> {
    let url = url.trim();

    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        bail!("PostgreSQL is not supported; use a sqlite:/// URL");
    }

    if url == "sqlite://" || url == "sqlite:///:memory:" {
        return Ok(PathBuf::from(":memory:"));
    }

    match url.strip_prefix("sqlite:///") {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => bail!("unsupported DATABASE_URL '{url}'"),
    }
}
