//! CLI argument parsing with clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Commerce composition service
#[derive(Parser, Debug)]
#[command(name = "bazaar-rs")]
#[command(about = "Commerce domain slices with cross-service read composition")]
#[command(long_about = "
Bazaar-rs serves the favourite, cart, order, payment and shipping slices of a
commerce system, resolving references to peer-owned users, products, carts
and orders into composed read models.

EXAMPLES:
    # Start the server with default configuration
    bazaar-rs serve

    # Start server on custom host and port
    bazaar-rs serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    bazaar-rs --config /path/to/config.toml serve

    # Check configuration without starting server
    bazaar-rs serve --dry-run

    # Run database migrations
    bazaar-rs migrate

    # Preview pending migrations
    bazaar-rs migrate --dry-run

    # Rollback last 2 migrations
    bazaar-rs migrate --rollback 2
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// TOML file used instead of the layered `config/` directory.
    #[arg(short, long, value_name = "FILE", value_parser = validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection (development, test, staging, production)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose (debug-level) logging. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT", value_parser = validate_port)]
        port: Option<u16>,

        /// Log level override (error, warn, info, debug, trace)
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    Migrate {
        /// Show pending migrations without applying
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Number of migrations to rollback (1-100)
        #[arg(long, value_name = "STEPS", conflicts_with = "dry_run", value_parser = validate_rollback_steps)]
        rollback: Option<u32>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

fn validate_config_file_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("configuration file does not exist: {value}"));
    }
    if !path.is_file() {
        return Err(format!("configuration path is not a file: {value}"));
    }
    Ok(path)
}

fn validate_host_address(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("host address must not be empty".to_string());
    }
    if value == "localhost" || value.parse::<std::net::IpAddr>().is_ok() {
        return Ok(value.to_string());
    }
    // Hostnames: letters, digits, dots and dashes.
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        Ok(value.to_string())
    } else {
        Err(format!("invalid host address: {value}"))
    }
}

fn validate_port(value: &str) -> Result<u16, String> {
    let port: u16 = value
        .parse()
        .map_err(|_| format!("port must be a number between 1 and 65535, got '{value}'"))?;
    if port == 0 {
        return Err("port must be between 1 and 65535".to_string());
    }
    Ok(port)
}

fn validate_rollback_steps(value: &str) -> Result<u32, String> {
    let steps: u32 = value
        .parse()
        .map_err(|_| format!("rollback steps must be a number, got '{value}'"))?;
    if !(1..=100).contains(&steps) {
        return Err("rollback steps must be between 1 and 100".to_string());
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_behavior_has_no_command() {
        let cli = Cli::try_parse_from(["bazaar-rs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn serve_command_parses_host_and_port() {
        let cli =
            Cli::try_parse_from(["bazaar-rs", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        let Some(Commands::Serve { host, port, .. }) = cli.command else {
            panic!("expected Serve command");
        };
        assert_eq!(host, Some("0.0.0.0".to_string()));
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn migrate_dry_run_conflicts_with_rollback() {
        let result =
            Cli::try_parse_from(["bazaar-rs", "migrate", "--dry-run", "--rollback", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["bazaar-rs", "--verbose", "--quiet"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn rejects_port_zero() {
        let result = Cli::try_parse_from(["bazaar-rs", "serve", "--port", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_rollback() {
        let result = Cli::try_parse_from(["bazaar-rs", "migrate", "--rollback", "500"]);
        assert!(result.is_err());
    }
}
