// Server loop module
// The accept loop, with clean-shutdown restart handling

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use super::listener::create_reusable_listener;
use super::restart::drain_old_listener;
use super::LISTEN_ADDR;
use crate::config::Config;
use crate::logger;
use crate::routing::app_router;

/// Shutdown signals observed by the serve loop
pub struct LoopSignals {
    /// Clean shutdown of the current listener; a fresh one replaces it
    pub reload: Arc<Notify>,
    /// Process termination
    pub terminate: Arc<Notify>,
}

/// Run the accept loop until the terminate signal.
///
/// A reload notification is the "clean shutdown" of the current listener:
/// the confirmation line is logged, a fresh listener is bound on the same
/// fixed port and a fresh route table takes over, while the old listener's
/// backlog drains in a background task. If the fresh bind fails, the error
/// is logged and the current listener stays in service.
pub async fn run_server_loop(mut listener: TcpListener, config: Arc<Config>, signals: LoopSignals) {
    let mut router = Arc::new(app_router());

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &config, &router);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signals.reload.notified() => {
                logger::log_shutdown_confirmed();

                // Bind the replacement before giving up the old listener
                let new_listener = match create_reusable_listener(LISTEN_ADDR) {
                    Ok(l) => {
                        logger::log_restart_bound(&LISTEN_ADDR);
                        l
                    }
                    Err(e) => {
                        logger::log_restart_bind_failed(&LISTEN_ADDR, &e);
                        continue;
                    }
                };

                let old_listener = listener;
                let old_config = Arc::clone(&config);
                let old_router = Arc::clone(&router);
                tokio::task::spawn_local(async move {
                    drain_old_listener(old_listener, old_config, old_router).await;
                });

                listener = new_listener;
                router = Arc::new(app_router());
                logger::log_restart_complete(&LISTEN_ADDR);
            }

            () = signals.terminate.notified() => {
                logger::log_server_stopped();
                return;
            }
        }
    }
}
