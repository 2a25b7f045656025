//! Command-line transport over the command layer. Every subcommand prints its
//! result as pretty JSON on stdout; failures print a `CommandError` on stderr.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::{
    bootstrap,
    catalog,
    config::AppConfig,
    db::MotionInput,
    error::CommandError,
    info_commands,
    studies::{self, commands::CreateStudyInput},
    AppState,
};

#[derive(Debug, Parser)]
#[command(name = "openpts")]
#[command(about = "Open Predetermined Time Standards - industrial time study calculations")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "OPENPTS_DATABASE_PATH")]
    pub database: Option<PathBuf>,

    /// SQLite URL, e.g. sqlite:///./openpts.db (ignored when --database is set)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the motion catalog
    Motions {
        #[command(subcommand)]
        command: MotionsCommand,
    },
    /// Create and recompute time studies
    Studies {
        #[command(subcommand)]
        command: StudiesCommand,
    },
    /// Service metadata and health
    Info,
}

#[derive(Debug, Subcommand)]
pub enum MotionsCommand {
    /// List every motion in catalog order
    List,
    /// Show one motion (code is case-insensitive)
    Get { code: String },
}

#[derive(Debug, Subcommand)]
pub enum StudiesCommand {
    /// Create a study from an ordered motion sequence
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Motion occurrence as CODE or CODE:QUANTITY, repeatable, in order
        #[arg(long = "motion", value_parser = parse_motion_arg)]
        motions: Vec<MotionInput>,
        /// Motion sequence as JSON: [{"code": "M3", "quantity": 2}, ...]
        #[arg(long, conflicts_with = "motions")]
        motions_json: Option<String>,
    },
    /// Recompute a stored study
    Get { id: String },
}

impl Cli {
    pub fn app_config(&self) -> Result<AppConfig> {
        AppConfig::resolve(
            self.database.clone(),
            self.database_url.as_deref(),
            self.debug,
        )
    }
}

pub fn parse_motion_arg(raw: &str) -> Result<MotionInput, String> {
    let (code, quantity) = match raw.split_once(':') {
        Some((code, quantity)) => {
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid quantity in '{raw}'"))?;
            (code, quantity)
        }
        None => (raw, 1),
    };

    let code = code.trim();
    if code.is_empty() {
        return Err(format!("missing motion code in '{raw}'"));
    }

    Ok(MotionInput::new(code, quantity))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report<T: Serialize>(outcome: Result<T, CommandError>) -> Result<()> {
    match outcome {
        Ok(value) => print_json(&value),
        Err(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err)?);
            Err(anyhow!(err.message))
        }
    }
}

pub async fn dispatch(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::Motions { command } => match command {
            MotionsCommand::List => report(catalog::commands::list_motions(state).await),
            MotionsCommand::Get { code } => report(catalog::commands::get_motion(state, code).await),
        },
        Command::Studies { command } => match command {
            StudiesCommand::Create {
                name,
                description,
                motions,
                motions_json,
            } => {
                let motions = match motions_json {
                    Some(raw) => serde_json::from_str::<Vec<MotionInput>>(&raw)
                        .map_err(|err| anyhow!("invalid --motions-json: {err}"))?,
                    None => motions,
                };
                let input = CreateStudyInput {
                    name,
                    description,
                    motions,
                };
                report(studies::commands::create_study(state, input).await)
            }
            StudiesCommand::Get { id } => report(studies::commands::get_study(state, id).await),
        },
        Command::Info => report(info_commands::service_info(state).await),
    }
}

/// Bootstrap the store (migrations + seed) and run one command.
pub async fn run(config: AppConfig, command: Command) -> Result<()> {
    let state = bootstrap::initialize(config).await?;
    dispatch(&state, command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_arg_defaults_quantity_to_one() {
        assert_eq!(parse_motion_arg("m3").unwrap(), MotionInput::new("m3", 1));
        assert_eq!(parse_motion_arg("G1:2").unwrap(), MotionInput::new("G1", 2));
    }

    #[test]
    fn motion_arg_rejects_bad_quantity() {
        assert!(parse_motion_arg("G1:two").is_err());
        assert!(parse_motion_arg(":2").is_err());
    }

    #[test]
    fn parses_create_command() {
        let cli = Cli::try_parse_from([
            "openpts",
            "--database",
            "/tmp/studies.db",
            "studies",
            "create",
            "--name",
            "Assembly A",
            "--motion",
            "M3",
            "--motion",
            "G1:2",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/studies.db")));
        match cli.command {
            Command::Studies {
                command: StudiesCommand::Create { name, motions, .. },
            } => {
                assert_eq!(name, "Assembly A");
                assert_eq!(motions, [MotionInput::new("M3", 1), MotionInput::new("G1", 2)]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
