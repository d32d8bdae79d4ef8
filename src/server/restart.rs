// Restart module
// Drains the replaced listener's backlog after a clean shutdown

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::Config;
use crate::logger;
use crate::routing::Router;

/// How long the replaced listener keeps accepting its backlog
const DRAIN_MILLIS: u64 = 100;

/// Accept connections from the replaced listener for a short window, then
/// drop it.
///
/// Backlog connections are served with the route table the old listener
/// was using. Connections already being served finish in their own tasks
/// after the listener is gone.
pub async fn drain_old_listener(
    old_listener: TcpListener,
    config: Arc<Config>,
    router: Arc<Router>,
) {
    let drain_deadline =
        tokio::time::Instant::now() + std::time::Duration::from_millis(DRAIN_MILLIS);

    loop {
        tokio::select! {
            accept_result = old_listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &config, &router);
                    }
                    Err(e) => {
                        logger::log_error(&format!("[OLD] Accept error: {e}"));
                        break;
                    }
                }
            }

            () = tokio::time::sleep_until(drain_deadline) => break,
        }
    }

    drop(old_listener);
}
