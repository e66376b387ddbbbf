//! Schema initialisation and one-time seeding.

use sqlx::{
    PgPool,
    migrate::{MigrateError, Migrator},
    query, query_scalar, raw_sql,
};
use thiserror::Error;
use tracing::info;

pub(crate) static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Seed dataset bundled with the binary.
pub const DEFAULT_SEED_SQL: &str = include_str!("../../seeds/default.sql");

const SCHEMA_EXISTS_SQL: &str = "SELECT to_regclass('public.products') IS NOT NULL";

const SCHEMA_LOCK_SQL: &str = "SELECT pg_advisory_xact_lock(hashtext('catalog.schema'))";

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),

    #[error("failed to seed database: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Which seed data to load when the schema is created.
#[derive(Debug, Clone, Copy)]
pub enum Seed<'a> {
    /// Load [`DEFAULT_SEED_SQL`].
    Default,

    /// Load the given SQL script.
    Sql(&'a str),

    /// Create the schema without loading any rows.
    Skip,
}

/// Outcome of [`initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The schema did not exist before this run.
    Created { seeded: bool },

    /// The schema already existed; pending migrations (if any) were applied.
    AlreadyPresent,
}

/// Apply migrations, seeding only when this call created the schema.
///
/// The existence check, migrations and seed share one transaction, so a
/// failed seed rolls the schema back too and the next run starts fresh.
/// Concurrent runs serialise on a transaction-scoped advisory lock.
///
/// # Errors
///
/// Returns an error when migrations or the seed script fail.
pub async fn initialize(pool: &PgPool, seed: Seed<'_>) -> Result<SchemaStatus, SchemaError> {
    let mut tx = pool.begin().await?;

    query(SCHEMA_LOCK_SQL).execute(&mut *tx).await?;

    let existed: bool = query_scalar(SCHEMA_EXISTS_SQL).fetch_one(&mut *tx).await?;

    MIGRATOR.run(&mut *tx).await?;

    let status = if existed {
        info!("schema already present, skipping seed");

        SchemaStatus::AlreadyPresent
    } else {
        let script = match seed {
            Seed::Default => Some(DEFAULT_SEED_SQL),
            Seed::Sql(script) => Some(script),
            Seed::Skip => None,
        };

        if let Some(script) = script {
            raw_sql(script).execute(&mut *tx).await?;
        }

        let seeded = script.is_some();

        info!(seeded, "schema created");

        SchemaStatus::Created { seeded }
    };

    tx.commit().await?;

    Ok(status)
}
