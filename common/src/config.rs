use crate::network::probe::ProbeTarget;

#[derive(Default)]
pub struct Config {
    /// Destination used to make the OS pick a route. Never receives payload.
    pub probe: ProbeTarget,
    /// Require the resolved address to be carried by a local interface.
    pub verify_interface: bool,
}
