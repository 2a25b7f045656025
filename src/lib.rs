mod utils;

pub mod bootstrap;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod info_commands;
pub mod studies;

use config::AppConfig;
use db::Database;

pub use catalog::MotionCatalog;
pub use error::{CommandError, ErrorKind, StudyError};

pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
}
