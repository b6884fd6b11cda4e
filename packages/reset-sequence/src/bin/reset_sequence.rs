//! Reset the primary-key sequence of a model's table, optionally deleting rows first
//!
//! Exit status is non-zero when the model cannot be resolved or a database
//! statement fails.

use anyhow::{Context, Result};
use clap::Parser;
use reset_sequence_core::output::{print_report, JsonResponse};
use reset_sequence_core::{
    run, BaseSchemaRegistry, CatalogRegistry, Config, ModelRegistry, PgTableStore, ResetOptions,
};
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reset_sequence")]
#[command(
    about = "Reset sequence of a model's primary key. Optionally delete one or more rows by ID."
)]
struct Cli {
    /// App label, e.g., 'funds'
    app_label: String,

    /// Model name, e.g., 'FundCategoryType'
    model_name: String,

    /// IDs of the rows to delete (space-separated)
    #[arg(long, num_args = 1.., value_name = "ID", allow_negative_numbers = true)]
    delete_ids: Option<Vec<i64>>,

    /// Only delete rows, do not reset the sequence
    #[arg(long)]
    delete_only: bool,

    /// TOML model manifest (overrides MODEL_REGISTRY)
    #[arg(long, value_name = "PATH")]
    registry: Option<PathBuf>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    /// Print a single JSON object instead of status lines
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for status lines / JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,reset_sequence_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match execute(cli).await {
        Ok(()) => Ok(()),
        Err(e) if json => {
            println!(
                "{}",
                serde_json::to_string(&JsonResponse::failure(format!("{:#}", e)))?
            );
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(cli.database_url, cli.registry)
        .context("Failed to load configuration")?;

    // A broken manifest is reported before touching the database
    let manifest = config
        .model_registry
        .as_deref()
        .map(ModelRegistry::load)
        .transpose()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let registry: Box<dyn BaseSchemaRegistry> = match manifest {
        Some(manifest) => Box::new(manifest),
        None => Box::new(CatalogRegistry::new(pool.clone())),
    };
    let store = PgTableStore::new(pool);

    let options = ResetOptions {
        app_label: cli.app_label,
        model_name: cli.model_name,
        delete_ids: cli.delete_ids.unwrap_or_default(),
        delete_only: cli.delete_only,
    };

    let report = run(registry.as_ref(), &store, &options).await?;
    print_report(&report, cli.json)?;

    Ok(())
}
