// Signal handling module
//
// SIGHUP stops the current listener cleanly; the serve loop then restarts
// on a fresh one. SIGTERM and SIGINT stop the process.

use std::sync::Arc;
use tokio::sync::Notify;

use super::server_loop::LoopSignals;

/// Install the signal handlers and return the signals the serve loop
/// waits on.
pub fn start_signal_handler() -> LoopSignals {
    let reload = Arc::new(Notify::new());
    let terminate = Arc::new(Notify::new());

    spawn_signal_task(Arc::clone(&reload), Arc::clone(&terminate));

    LoopSignals { reload, terminate }
}

#[cfg(unix)]
fn spawn_signal_task(reload: Arc<Notify>, terminate: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sighup = signal(SignalKind::hangup()).expect("Failed to register SIGHUP handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        println!("[SIGNAL] Signal handlers registered:");
        println!("  - SIGHUP  (kill -HUP <pid>)   : Stop listener, restart on a fresh one");
        println!("  - SIGTERM (kill <pid>)        : Stop the server");
        println!("  - SIGINT  (Ctrl+C)            : Stop the server");
        println!("[SIGNAL] Process ID: {}", std::process::id());

        loop {
            tokio::select! {
                _ = sighup.recv() => {
                    println!("[SIGNAL] SIGHUP received, restarting listener");
                    reload.notify_one();
                }

                _ = sigterm.recv() => {
                    println!("[SIGNAL] SIGTERM received, shutting down");
                    terminate.notify_one();
                    break;
                }

                _ = sigint.recv() => {
                    println!("[SIGNAL] SIGINT received, shutting down");
                    terminate.notify_one();
                    break;
                }
            }
        }
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
fn spawn_signal_task(_reload: Arc<Notify>, terminate: Arc<Notify>) {
    tokio::spawn(async move {
        println!("[SIGNAL] Windows mode: Only Ctrl+C is supported");

        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!("[SIGNAL] Ctrl+C received, shutting down");
            terminate.notify_one();
        }
    });
}
