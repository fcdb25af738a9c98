use std::fmt;
use std::net::IpAddr;

/// The source address the OS picked towards a probe target.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct LocalAddress(IpAddr);

impl LocalAddress {
    /// Returns `None` for the unspecified address, which only means the kernel
    /// has not chosen a route. IPv4-mapped IPv6 addresses are stored as IPv4.
    pub fn new(ip: IpAddr) -> Option<Self> {
        let ip = ip.to_canonical();
        if ip.is_unspecified() {
            None
        } else {
            Some(Self(ip))
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl From<LocalAddress> for IpAddr {
    fn from(addr: LocalAddress) -> Self {
        addr.0
    }
}

impl fmt::Display for LocalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
