use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use env_logger::Builder;
use miette::{IntoDiagnostic, Result, WrapErr};
use tokio_graceful_shutdown::{SubsystemBuilder, Toplevel};

use zonecheck_server::store::MemoryZoneStore;
use zonecheck_server::web::Web;
use zonecheck_server::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // RUST_LOG, when set, refines the command line level
    Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let store = MemoryZoneStore::load(&args.zones)
        .into_diagnostic()
        .wrap_err("Unable to load restricted zones")?;
    log::info!(
        "Loaded {} restricted zones from {}",
        store.len(),
        args.zones.display()
    );
    if store.is_empty() {
        log::warn!("Zone table is empty, every location will be reported as safe");
    }

    let web = Web::new(&args, Arc::new(store));

    Toplevel::new(|s| async move {
        s.start(SubsystemBuilder::new("Webserver", |a| web.run(a)));
    })
    .catch_signals()
    .handle_shutdown_requests(Duration::from_millis(1000))
    .await
    .map_err(Into::into)
}
