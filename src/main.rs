use clap::Parser;
use dotenvy::dotenv;
use srms::cli::{self, Cli};
use srms::logging::init_tracing;
use srms::srms_config::LogConfig;
use srms::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing(&LogConfig::from_env());

    let cli = Cli::parse();

    let state = match init_app_state() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(cli, &state).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
