//! LlamaVocs web server.

use clap::Parser;
use llamavocs_rpc::app_router;
use llamavocs_store::CardStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Path that selects a throwaway in-memory store.
const MEMORY_DATABASE: &str = ":memory:";

/// LlamaVocs flashcard server.
#[derive(Parser, Debug)]
#[command(name = "llamavocs-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database file (":memory:" for a throwaway store)
    #[arg(long, default_value = "llamavocs.db")]
    database: String,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = if args.database == MEMORY_DATABASE {
        CardStore::open_in_memory()?
    } else {
        CardStore::open(&args.database)?
    };
    info!(database = %args.database, cards = store.count()?, "Opened card store");

    let caller = app_router().caller(store);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "LlamaVocs listening");

    llamavocs_server::serve(listener, caller).await?;

    info!("Server stopped");
    Ok(())
}
