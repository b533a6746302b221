//! Baseline reconciliation run.
//!
//! Resolves the source and targets against the fleet, fetches every
//! inventory sequentially (source first), and prints one install/remove
//! block per target as each diff is computed.

use anyhow::Result;
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};

use fleetkit::{
    Backend, BaselineDiff, EndpointDirectory, InventoryFetcher, MerakiBackend, exclusions,
    reconcile,
};

use crate::Context;
use crate::cli::BaselineArgs;
use crate::config;
use crate::progress;

pub fn run(ctx: &Context, args: BaselineArgs) -> Result<()> {
    let credentials = config::resolve(args.api.api_key, args.api.network)?;
    let excluded = exclusions::load(args.exclusions.as_deref())?;

    log::info!("connecting to the dashboard");
    let backend = MerakiBackend::new(credentials.api_key);
    run_with_backend(
        ctx,
        &backend,
        &credentials.network,
        &excluded,
        &args.source,
        &args.targets,
    )
}

/// The whole run against any backend; the seam the tests drive.
fn run_with_backend<B: Backend>(
    ctx: &Context,
    backend: &B,
    network: &str,
    excluded: &BTreeSet<String>,
    source: &str,
    requested: &[String],
) -> Result<()> {
    log::info!("gathering devices");
    let directory = EndpointDirectory::from_devices(backend.list_devices(network)?);
    let (source_name, source_id) = directory.resolve_source(source)?;

    let fetcher = InventoryFetcher::new(backend, network, excluded);
    log::info!("getting source software for {source_name}");
    let baseline = fetcher.fetch(&source_id)?;

    let targets = directory.select_targets(&source_name, requested)?;

    // A live bar would interleave with log narration under -v.
    let pb = progress::endpoint_bar(targets.len() as u64, ctx.quiet || ctx.verbose > 0);
    let mut inventories = BTreeMap::new();
    for (name, id) in targets {
        pb.set_message(name.to_string());
        let inventory = fetcher.fetch(&id)?;
        inventories.insert(name, inventory);
        pb.inc(1);
    }
    pb.finish_and_clear();

    for diff in reconcile(&baseline, &inventories) {
        print!("{}", render_diff(&diff));
    }

    Ok(())
}

/// One report block for a target.
fn render_diff(diff: &BaselineDiff) -> String {
    let mut out = String::new();

    out.push_str(&format!("Apps to install on {}\n", diff.target));
    for app in &diff.to_install {
        out.push_str(&format!(" {} {app}\n", "+".green()));
    }

    out.push_str(&format!("Apps to remove from {}\n", diff.target));
    for app in &diff.to_remove {
        out.push_str(&format!(" {} {app}\n", "-".red()));
    }

    out
}
