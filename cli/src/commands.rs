use clap::{ArgAction, Parser};
use routeip_common::config::Config;
use routeip_common::network::probe::{AddressFamily, ProbeTarget};
use tracing::Level;

#[derive(Parser)]
#[command(name = "routeip")]
#[command(about = "Print the local IP address used for outbound traffic.")]
#[command(version)]
pub struct CommandLine {
    /// Route towards the IPv6 default probe instead of the IPv4 one
    #[arg(short = '6', long = "ipv6", conflicts_with = "probe")]
    pub ipv6: bool,

    /// Probe target as IP or IP:PORT. Only used for route selection, nothing is sent
    #[arg(short, long, value_name = "ADDR")]
    pub probe: Option<ProbeTarget>,

    /// Fail unless the address is assigned to a local interface that is up
    #[arg(long)]
    pub verify: bool,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let probe: ProbeTarget = match (self.probe, self.ipv6) {
            (Some(probe), _) => probe,
            (None, true) => ProbeTarget::default_for(AddressFamily::V6),
            (None, false) => ProbeTarget::default(),
        };

        Config {
            probe,
            verify_interface: self.verify,
        }
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
