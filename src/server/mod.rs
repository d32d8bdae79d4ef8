// Server module entry
// Listener creation, connection handling, the accept loop, and signals

pub mod connection;
pub mod listener;
pub mod restart;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Fixed listen address. The port is part of this server's external
/// contract and is not configurable.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

pub use listener::create_reusable_listener;
pub use server_loop::{run_server_loop, LoopSignals};
pub use signal::start_signal_handler;
