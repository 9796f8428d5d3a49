//! Migrate command handler.
//!
//! Handles database migration operations including dry-run and rollback.
//! Migrations run over a blocking diesel connection inside
//! `spawn_blocking`; the async pool is not involved.

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::MigrationHarness;

use crate::config::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

/// Handler for the migrate command.
pub struct MigrateCommandHandler {
    settings: Settings,
}

impl MigrateCommandHandler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Execute the migrate command with dry-run and rollback support.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.settings
            .database
            .validate()
            .map_err(|e| AppError::Configuration {
                key: "database".to_string(),
                source: anyhow::Error::from(e),
            })?;

        if dry_run {
            return self.show_pending_migrations().await;
        }

        match rollback {
            Some(steps) => self.rollback_migrations(steps).await,
            None => self.run_migrations().await,
        }
    }

    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let database_url = self.settings.database.url.clone();
        let pending_count: usize = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_url)?;
            let pending = conn
                .pending_migrations(MIGRATIONS)
                .map_err(|e| migration_error("check pending migrations", e))?;
            Ok::<_, AppError>(pending.len())
        })
        .await
        .map_err(join_error)??;

        if pending_count == 0 {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {pending_count} pending migration(s)");
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let database_url = self.settings.database.url.clone();
        let applied: Vec<String> = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_url)?;
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| migration_error("run pending migrations", e))?;
            Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect())
        })
        .await
        .map_err(join_error)??;

        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for migration in &applied {
                println!("  - {migration}");
            }
        }

        Ok(())
    }

    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        println!("Rolling back {steps} migration(s)...");

        let database_url = self.settings.database.url.clone();
        let reverted: usize = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_url)?;

            let applied = conn
                .applied_migrations()
                .map_err(|e| migration_error("get applied migrations", e))?;
            if applied.len() < steps as usize {
                return Err(AppError::Validation {
                    field: "rollback_steps".to_string(),
                    reason: format!(
                        "cannot rollback {} migrations - only {} applied",
                        steps,
                        applied.len()
                    ),
                });
            }

            for _ in 0..steps {
                conn.revert_last_migration(MIGRATIONS)
                    .map_err(|e| migration_error("revert migration", e))?;
            }
            Ok::<_, AppError>(steps as usize)
        })
        .await
        .map_err(join_error)??;

        println!("✓ Rolled back {reverted} migration(s)");

        Ok(())
    }
}

fn establish(database_url: &str) -> Result<PgConnection, AppError> {
    PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "establish connection for migrations".to_string(),
        source: anyhow::Error::from(e),
    })
}

fn migration_error(
    operation: &str,
    error: Box<dyn std::error::Error + Send + Sync>,
) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("Migration error: {error}"),
    }
}

fn join_error(error: tokio::task::JoinError) -> AppError {
    AppError::Internal {
        source: anyhow::Error::from(error),
    }
}
