use std::sync::Arc;

use anyhow::Context as _;
use in_memory_store::InMemoryWebinarStore;
use postgres_store::PostgresWebinarStore;
use server::App;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Store {
    InMemory,
    Postgres,
}

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
    bind_address: String,
    #[arg(long, env = "DATABASE_URL", required_if_eq("store", "postgres"))]
    database_url: Option<String>,
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
    #[arg(long, env = "STORE", value_enum, default_value_t = Store::InMemory)]
    store: Store,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let app = match args.store {
        Store::InMemory => {
            tracing::info!("using the in-memory store");
            let store = InMemoryWebinarStore::new();
            App::new(Arc::new(store.clone()), Arc::new(store))
        }
        Store::Postgres => {
            let database_url = args
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;
            let store = PostgresWebinarStore::connect(database_url, args.max_connections)
                .await
                .context("connect to the database")?;
            tracing::info!("database connected");
            store
                .run_migrations()
                .await
                .context("run database migrations")?;
            App::new(Arc::new(store.clone()), Arc::new(store))
        }
    };
    Ok(server::run(app, &args.bind_address).await?)
}
