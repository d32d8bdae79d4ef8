//! Logger module
//!
//! Unstructured log lines for server lifecycle events, per-request
//! diagnostics, and errors. Writes to stdout/stderr by default, or to
//! files when configured.

pub mod writer;

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info(&format!("[{}] HTTP server started", timestamp()));
    write_info(&format!("Listening on: http://{addr}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// Fixed diagnostic line emitted by each route handler
pub fn log_request_received(path: &str) {
    write_info(&format!("Received request for {path}"));
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    write_info(&format!("[Request] {method} {uri} {version:?}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Confirmation line for a clean listener shutdown
pub fn log_shutdown_confirmed() {
    write_info("HTTP server has been shutdown");
}

/// First-listener startup failure; the process exits right after this
pub fn log_startup_failed(err: &std::io::Error) {
    write_error(&format!("Error starting HTTP server: {err}"));
}

pub fn log_restart_bound(addr: &SocketAddr) {
    write_info(&format!("[Restart] New listener bound on {addr}"));
}

pub fn log_restart_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    write_error(&format!("[Restart] Failed to bind {addr}: {err}"));
    write_error("          Continuing with current listener");
}

pub fn log_restart_complete(addr: &SocketAddr) {
    write_info(&format!("[Restart] Serving on http://{addr} with a fresh route table"));
}

pub fn log_server_stopped() {
    write_info(&format!("[{}] Server stopped", timestamp()));
}
