use std::path::PathBuf;

use catalog_app::database::{
    self,
    schema::{self, SchemaStatus, Seed},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// SQL script to seed a newly created schema with; defaults to the bundled dataset
    #[arg(long, conflicts_with = "skip_seed")]
    seed_file: Option<PathBuf>,

    /// Create the schema without seed data
    #[arg(long)]
    skip_seed: bool,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let script = match &args.seed_file {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .map_err(|error| format!("failed to read {}: {error}", path.display()))?,
        ),
        None => None,
    };

    let seed = match (&script, args.skip_seed) {
        (_, true) => Seed::Skip,
        (Some(script), false) => Seed::Sql(script),
        (None, false) => Seed::Default,
    };

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let status = schema::initialize(&pool, seed)
        .await
        .map_err(|error| format!("failed to initialize schema: {error}"))?;

    match status {
        SchemaStatus::Created { seeded: true } => println!("schema: created (seeded)"),
        SchemaStatus::Created { seeded: false } => println!("schema: created (not seeded)"),
        SchemaStatus::AlreadyPresent => println!("schema: already present"),
    }

    pool.close().await;

    Ok(())
}
