//! Database access: connection pooling and embedded migrations.

mod pool;

pub use pool::{establish_async_connection_pool, AsyncDbPool};

use diesel_migrations::{embed_migrations, EmbeddedMigrations};

/// All SQL migrations, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
