// Reusable listener module
// TCP listeners with SO_REUSEPORT so a restarted listener can rebind the
// fixed port while the previous socket is still draining

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create a `TcpListener` with `SO_REUSEPORT` and `SO_REUSEADDR` enabled.
///
/// Restart binds a second listener on the same port before the first is
/// dropped; without these options that bind fails whenever the old socket
/// is not fully released.
pub fn create_reusable_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;
    // Tokio requires the socket in non-blocking mode
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_same_port_twice() {
        let first = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = first.local_addr().unwrap();

        // The restart path relies on a second bind to the same port
        // succeeding while the first listener is still open
        let second = create_reusable_listener(addr).unwrap();
        assert_eq!(second.local_addr().unwrap().port(), addr.port());
    }

    #[tokio::test]
    async fn bind_error_is_reported() {
        // TEST-NET-3 address, not assigned to any local interface
        let result = create_reusable_listener("203.0.113.1:0".parse().unwrap());
        assert!(result.is_err());
    }
}
