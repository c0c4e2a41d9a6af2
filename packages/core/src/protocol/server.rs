//! stdio Server
//!
//! Async loop that reads requests from stdin and writes responses to stdout.
//! One request is fully handled before the next line is read.

use crate::config::ServerConfig;
use crate::protocol::dispatcher::Dispatcher;
use crate::protocol::transport::{RequestStream, ResponseSink};
use crate::services::HierarchyStore;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tracing::{info, instrument};

/// Run the server over stdin/stdout
///
/// Starts from an empty forest and runs until stdin is closed.
///
/// # Returns
///
/// Returns Ok(()) when stdin is closed, or Err on I/O failures
#[instrument(skip(config))]
pub async fn run_stdio_server(config: &ServerConfig) -> anyhow::Result<()> {
    let store = HierarchyStore::with_auto_id_prefix(config.auto_id_prefix.clone());
    let reader = BufReader::new(tokio::io::stdin());

    serve(Dispatcher::new(store), reader, tokio::io::stdout()).await?;
    Ok(())
}

/// Serve requests from `reader` until it is exhausted
///
/// Every non-blank input line produces exactly one response line on
/// `writer`; bad lines are answered with an error response and the loop
/// keeps going. Only transport I/O errors end the loop early.
///
/// Returns the dispatcher so callers can inspect the final forest.
pub async fn serve<R, W>(
    mut dispatcher: Dispatcher,
    reader: R,
    writer: W,
) -> anyhow::Result<Dispatcher>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("🔌 Hierarchy server started");

    let mut requests = RequestStream::new(reader);
    let mut responses = ResponseSink::new(writer);
    let mut handled = 0usize;

    while let Some(request) = requests.next_request().await? {
        let response = match request {
            Ok(request) => dispatcher.handle_request(request),
            Err(error) => dispatcher.reject(error),
        };

        responses.send(&response).await?;
        handled += 1;
    }

    info!(
        "🔌 Hierarchy server stopped (input closed after {} requests, {} nodes)",
        handled,
        dispatcher.store().len()
    );
    Ok(dispatcher)
}
