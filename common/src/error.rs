use std::io;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Every way the host can fail to hand us a routable local address.
#[derive(Debug, Error)]
pub enum NetworkUnavailable {
    /// No datagram socket could be opened (descriptor limits, sandboxing, missing family).
    #[error("network unavailable: cannot open a UDP socket on {bind}")]
    Bind {
        bind: SocketAddr,
        #[source]
        source: io::Error,
    },
    /// The OS has no route towards the probe target.
    #[error("network unavailable: no route towards {target}")]
    Connect {
        target: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("network unavailable: cannot read the local socket address")]
    LocalAddr {
        #[source]
        source: io::Error,
    },
    /// The socket connected but the kernel never picked a source address.
    #[error("network unavailable: no local address selected towards {target}")]
    Unspecified { target: SocketAddr },
    /// The selected address is not carried by any interface on this host.
    #[error("network unavailable: {addr} is not assigned to any local interface")]
    Unassigned { addr: IpAddr },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeTargetError {
    #[error("'{0}' is not an IP address or IP:port pair")]
    Malformed(String),
    #[error("port 0 cannot be used as a probe target")]
    ZeroPort,
}
