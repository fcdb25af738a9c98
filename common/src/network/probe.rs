use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ProbeTargetError;

/// Port used when a probe is given as a bare IP.
pub const DEFAULT_PROBE_PORT: u16 = 80;
pub const DEFAULT_PROBE_V4: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);
pub const DEFAULT_PROBE_V6: Ipv6Addr = Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Wildcard address a probe socket of this family binds to.
    pub fn unspecified_bind(self) -> SocketAddr {
        match self {
            AddressFamily::V4 => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            AddressFamily::V6 => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        }
    }
}

/// Route-selection anchor. The resolver connects a datagram socket here so the
/// kernel binds a source address, nothing is ever sent to it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ProbeTarget(SocketAddr);

impl ProbeTarget {
    pub fn new(addr: SocketAddr) -> Result<Self, ProbeTargetError> {
        if addr.port() == 0 {
            return Err(ProbeTargetError::ZeroPort);
        }
        Ok(Self(addr))
    }

    pub fn default_for(family: AddressFamily) -> Self {
        let ip = match family {
            AddressFamily::V4 => IpAddr::V4(DEFAULT_PROBE_V4),
            AddressFamily::V6 => IpAddr::V6(DEFAULT_PROBE_V6),
        };
        Self(SocketAddr::new(ip, DEFAULT_PROBE_PORT))
    }

    pub fn addr(&self) -> SocketAddr {
        self.0
    }

    pub fn family(&self) -> AddressFamily {
        match self.0 {
            SocketAddr::V4(_) => AddressFamily::V4,
            SocketAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self::default_for(AddressFamily::V4)
    }
}

impl FromStr for ProbeTarget {
    type Err = ProbeTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Self::new(addr);
        }
        // Bare IPs, IPv6 with or without brackets.
        let bare = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);
        match bare.parse::<IpAddr>() {
            Ok(ip) => Self::new(SocketAddr::new(ip, DEFAULT_PROBE_PORT)),
            Err(_) => Err(ProbeTargetError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
