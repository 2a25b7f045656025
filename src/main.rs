use clap::Parser;
use log::error;

use openpts_lib::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err:#}");
            std::process::exit(2);
        }
    };

    // RUST_LOG takes precedence over the default level.
    env_logger::Builder::new()
        .filter_level(if config.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    log::info!("OpenPTS starting up...");

    if let Err(err) = cli::run(config, cli.command).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
