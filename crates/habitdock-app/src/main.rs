use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use habitdock_domain::session::{Session, UserRole};
use habitdock_domain::shared::UserId;
use habitdock_infrastructure::logging::{init_console_logger, init_logger, LoggerOptions};
use habitdock_lib::application::services::ConfigService;
use habitdock_lib::presentation::bootstrap::build_app_state;
use habitdock_lib::presentation::cli::{Cli, Commands};
use habitdock_lib::presentation::commands::{execute, run_config_command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Arc::new(ConfigService::load(cli.config.clone())?);
    let level = if cli.verbose {
        "debug"
    } else {
        config.get_log_level().as_str()
    };

    if let Err(e) = init_logger(LoggerOptions {
        log_dir: config.log_dir(),
        level: level.to_string(),
        verbose: cli.verbose,
    }) {
        init_console_logger(level);
        tracing::warn!(error = %e, "File logging unavailable, using console only");
    }

    config.log_load_outcome();

    // One calendar day for the whole invocation
    let today = chrono::Local::now().date_naive();

    let output = match cli.command {
        Commands::Config { command } => run_config_command(&config, command),
        command => {
            let role = if cli.admin { UserRole::Admin } else { UserRole::User };
            let session = Session::new(UserId::from_string(&cli.user), cli.email, role)
                .map_err(|e| anyhow::anyhow!(e.format_with_code()))?;
            let state = build_app_state(config.clone())
                .await
                .map_err(|e| anyhow::anyhow!(e.format_with_code()))?;

            execute(&state, &session, command, today).await
        }
    };

    match output {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(code = e.code().code(), error = %e, "Command failed");
            Err(anyhow::anyhow!(e.format_with_code()))
        }
    }
}
