mod commands;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use routeip_common::config::Config;
use routeip_core::resolver;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.log_level());

    let cfg: Config = commands.config();
    let resolution = resolver::resolve(&cfg)
        .with_context(|| format!("could not resolve the local address towards {}", cfg.probe))?;

    if let Some(iface) = &resolution.interface {
        tracing::debug!("Verified against interface {}", iface.name);
    }

    // Stdout carries the address and nothing else.
    println!("{}", resolution.address);
    Ok(())
}
