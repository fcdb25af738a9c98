use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};
use tracing::{debug, warn};

use crate::network::address::LocalAddress;

pub trait NetworkInterfaceExtension {
    /// True when `ip` is one of the addresses configured on this interface.
    /// Subnet membership does not count.
    fn carries(&self, ip: IpAddr) -> bool;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn carries(&self, ip: IpAddr) -> bool {
        self.ips.iter().any(|net| net.ip() == ip)
    }
}

/// Finds the interface an address is assigned to.
///
/// Interfaces that are down are skipped, the address would not be usable for
/// outbound traffic through them anyway.
pub fn find_owning_interface(
    interfaces: &[NetworkInterface],
    ip: IpAddr,
) -> Option<&NetworkInterface> {
    interfaces
        .iter()
        .filter(|iface| iface.is_up())
        .find(|iface| iface.carries(ip))
}

/// Looks the address up in the host's live interface table.
pub fn assigned_interface(addr: LocalAddress) -> Option<NetworkInterface> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    debug!("Checking {} against {} interface(s)", addr, interfaces.len());

    match find_owning_interface(&interfaces, addr.ip()) {
        Some(iface) => {
            debug!("{} is assigned to {}", addr, iface.name);
            Some(iface.clone())
        }
        None => {
            warn!("{} is not assigned to any interface that is up", addr);
            None
        }
    }
}
