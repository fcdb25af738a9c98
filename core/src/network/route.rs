use std::io;
use std::net::{SocketAddr, UdpSocket};

use routeip_common::error::NetworkUnavailable;
use routeip_common::network::probe::ProbeTarget;
use tracing::{debug, trace};

/// Asks the OS which source address it would use towards a destination.
pub trait RouteProbe {
    fn source_for(&self, target: ProbeTarget) -> Result<SocketAddr, NetworkUnavailable>;
}

/// Connects an unsent UDP socket to the target and reads back the address the
/// kernel bound it to. Connecting a datagram socket performs route selection
/// only, no packet leaves the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpRouteProbe;

impl RouteProbe for UdpRouteProbe {
    fn source_for(&self, target: ProbeTarget) -> Result<SocketAddr, NetworkUnavailable> {
        let bind: SocketAddr = target.family().unspecified_bind();

        // Dropped on every return path, closing the descriptor.
        let socket: UdpSocket =
            UdpSocket::bind(bind).map_err(|source| NetworkUnavailable::Bind { bind, source })?;
        trace!("Bound probe socket on {}", bind);

        socket
            .connect(target.addr())
            .map_err(|source| NetworkUnavailable::Connect { target: target.addr(), source })?;

        let local: SocketAddr = socket
            .local_addr()
            .map_err(|source: io::Error| NetworkUnavailable::LocalAddr { source })?;
        debug!("Kernel routed {} via {}", target, local);

        Ok(local)
    }
}
