//! Fleet listing.

use anyhow::Result;
use colored::Colorize;

use fleetkit::{Backend, EndpointDirectory, MerakiBackend};

use crate::Context;
use crate::cli::DevicesArgs;
use crate::config;
use crate::ui;

pub fn run(_ctx: &Context, args: DevicesArgs) -> Result<()> {
    let credentials = config::resolve(args.api.api_key, args.api.network)?;
    let backend = MerakiBackend::new(credentials.api_key);

    log::info!("gathering devices");
    let directory = EndpointDirectory::from_devices(backend.list_devices(&credentials.network)?);

    ui::header("Managed Endpoints");
    if directory.is_empty() {
        ui::dim("none found");
        return Ok(());
    }

    for (name, id) in directory.iter() {
        println!("  {} {}", id.dimmed(), name);
    }
    println!();
    println!("{} endpoints", directory.len().to_string().bold());

    Ok(())
}
