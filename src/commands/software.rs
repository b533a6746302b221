//! Single-endpoint inventory listing.

use anyhow::{Result, bail};

use fleetkit::{Backend, EndpointDirectory, EndpointName, InventoryFetcher, MerakiBackend, exclusions};

use crate::Context;
use crate::cli::SoftwareArgs;
use crate::config;
use crate::ui;

pub fn run(_ctx: &Context, args: SoftwareArgs) -> Result<()> {
    let credentials = config::resolve(args.api.api_key, args.api.network)?;
    let excluded = exclusions::load(args.exclusions.as_deref())?;
    let backend = MerakiBackend::new(credentials.api_key);

    log::info!("gathering devices");
    let directory = EndpointDirectory::from_devices(backend.list_devices(&credentials.network)?);

    let name = EndpointName::new(&args.endpoint);
    let Some(id) = directory.resolve(&args.endpoint) else {
        bail!("endpoint not found in the fleet: {}", args.endpoint);
    };

    let fetcher = InventoryFetcher::new(&backend, &credentials.network, &excluded);
    let inventory = fetcher.fetch(id)?;

    ui::header(&format!("Software on {name}"));
    if inventory.is_empty() {
        ui::dim("no software reported");
        return Ok(());
    }

    for app in &inventory {
        println!("  {app}");
    }

    Ok(())
}
