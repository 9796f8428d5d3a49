//! CLI execution: loads configuration, applies CLI overrides, and
//! dispatches to the command handlers.

use crate::cli::handlers::{MigrateCommandHandler, ServeCommandHandler};
use crate::cli::parser::{Cli, Commands};
use crate::config::{ConfigLoader, Environment, Settings};

/// Runs the parsed CLI command to completion.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    // The environment flag must take effect before configuration loading,
    // since it selects which {environment}.toml layer applies.
    if let Some(ref env) = cli.env {
        let env: Environment = env.clone().into();
        unsafe {
            std::env::set_var(Environment::ENV_VAR, env.as_str());
        }
    }

    let mut settings = load_settings(&cli)?;
    apply_global_overrides(&cli, &mut settings);

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            log_level,
            dry_run,
        }) => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            if let Some(level) = log_level {
                settings.logger.level = level.as_str().to_string();
            }
            crate::logger::init(&settings.logger)?;
            ServeCommandHandler::new(settings).execute(dry_run).await?;
        }
        Some(Commands::Migrate { dry_run, rollback }) => {
            crate::logger::init(&settings.logger)?;
            MigrateCommandHandler::new(settings)
                .execute(dry_run, rollback)
                .await?;
        }
        // No subcommand defaults to serving.
        None => {
            crate::logger::init(&settings.logger)?;
            ServeCommandHandler::new(settings).execute(false).await?;
        }
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    if let Some(ref config_file) = cli.config {
        unsafe {
            std::env::set_var("BAZAAR_CONFIG_FILE", config_file);
            std::env::remove_var("BAZAAR_CONFIG_DIR");
        }
    }
    let settings = ConfigLoader::new()?.load()?;
    Ok(settings)
}

fn apply_global_overrides(cli: &Cli, settings: &mut Settings) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    }
    if cli.quiet {
        settings.logger.level = "error".to_string();
    }
}
