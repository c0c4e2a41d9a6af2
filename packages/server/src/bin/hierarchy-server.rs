//! Hierarchy Store stdio Server
//!
//! Reads one JSON command per line from stdin and answers with one JSON line
//! on stdout until stdin is closed. Logs go to stderr so they never mix with
//! protocol output.
//!
//! # Usage
//!
//! ```bash
//! echo '{"add_node":{"name":"root","id":"1","parent_id":""}}' | cargo run --bin hierarchy-server
//! ```
//!
//! # Configuration
//!
//! - `HIERARCHY_LOG` (or `RUST_LOG`): tracing filter, defaults to info for this server
//! - `HIERARCHY_AUTO_ID_PREFIX`: prefix for auto-assigned ids, defaults to `auto-`

use hierarchy_core::protocol::run_stdio_server;
use hierarchy_core::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "🔧 Starting hierarchy-server (auto id prefix '{}')",
        config.auto_id_prefix
    );

    if let Err(e) = run_stdio_server(&config).await {
        tracing::error!("❌ Hierarchy server failed: {}", e);
        return Err(e);
    }

    Ok(())
}
