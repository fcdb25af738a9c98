use pnet::datalink::NetworkInterface;
use routeip_common::config::Config;
use routeip_common::error::NetworkUnavailable;
use routeip_common::network::address::LocalAddress;
use routeip_common::network::interface;
use routeip_common::network::probe::ProbeTarget;
use tracing::{debug, info};

use crate::network::route::{RouteProbe, UdpRouteProbe};

/// Resolves the local address the OS would use for outbound traffic.
pub struct LocalAddressResolver<P: RouteProbe = UdpRouteProbe> {
    probe: P,
    target: ProbeTarget,
}

/// A resolved address together with the interface carrying it, when checked.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub address: LocalAddress,
    pub interface: Option<NetworkInterface>,
}

impl LocalAddressResolver {
    pub fn new(target: ProbeTarget) -> Self {
        Self::with_probe(UdpRouteProbe, target)
    }
}

impl Default for LocalAddressResolver {
    fn default() -> Self {
        Self::new(ProbeTarget::default())
    }
}

impl<P: RouteProbe> LocalAddressResolver<P> {
    pub fn with_probe(probe: P, target: ProbeTarget) -> Self {
        Self { probe, target }
    }

    pub fn target(&self) -> ProbeTarget {
        self.target
    }

    pub fn resolve(&self) -> Result<LocalAddress, NetworkUnavailable> {
        debug!("Probing route towards {}", self.target);
        let local = self.probe.source_for(self.target)?;

        let address = LocalAddress::new(local.ip())
            .ok_or(NetworkUnavailable::Unspecified { target: self.target.addr() })?;
        info!("Outbound traffic leaves from {}", address);

        Ok(address)
    }

    /// Resolves and, if `verify` is set, requires the address to be carried by
    /// an interface that is up.
    pub fn resolve_checked(&self, verify: bool) -> Result<Resolution, NetworkUnavailable> {
        let address = self.resolve()?;
        if !verify {
            return Ok(Resolution { address, interface: None });
        }

        let iface = interface::assigned_interface(address)
            .ok_or(NetworkUnavailable::Unassigned { addr: address.ip() })?;
        info!("{} is assigned to {}", address, iface.name);

        Ok(Resolution { address, interface: Some(iface) })
    }
}

/// Resolves with the settings of a parsed configuration.
pub fn resolve(cfg: &Config) -> Result<Resolution, NetworkUnavailable> {
    LocalAddressResolver::new(cfg.probe).resolve_checked(cfg.verify_interface)
}
