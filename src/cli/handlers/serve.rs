//! Serve command handler.

use crate::config::Settings;
use crate::error::AppResult;
use crate::server::Server;

/// Handler for the serve command.
pub struct ServeCommandHandler {
    settings: Settings,
}

impl ServeCommandHandler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Validates configuration and, unless this is a dry run, starts the
    /// HTTP server until a shutdown signal arrives.
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        self.settings
            .validate()
            .map_err(|e| crate::error::AppError::Configuration {
                key: "settings".to_string(),
                source: anyhow::Error::from(e),
            })?;
        self.settings
            .database
            .validate()
            .map_err(|e| crate::error::AppError::Configuration {
                key: "database".to_string(),
                source: anyhow::Error::from(e),
            })?;

        if dry_run {
            println!("✓ Configuration is valid");
            println!("  server: {}", self.settings.server.address());
            println!("  peers:  users    -> {}", self.settings.peers.users_endpoint());
            println!("          products -> {}", self.settings.peers.products_endpoint());
            println!("          orders   -> {}", self.settings.peers.orders_endpoint());
            println!("          carts    -> {}", self.settings.peers.carts_endpoint());
            return Ok(());
        }

        Server::new(self.settings)
            .run()
            .await
            .map_err(|e| crate::error::AppError::Internal { source: e })
    }
}
