//! `inventory-dialog`: replays a scripted inventory dialog session.
//!
//! Usage:
//!   inventory-dialog --script <session.jsonl> [--config <dialog.toml>] [--locale <lang>]
//!
//! Prints the dialog view as one JSON line after every event, then the
//! stored inventories.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use openerp_flux::Flux;
use tracing::info;

use inventory::model::FluxCatalog;
use inventory::script::parse_script;
use inventory::state::ProductList;
use inventory::{
    current_dialog, register_handlers, BookHost, DialogConfig, DialogContext, DialogView,
    InventoryBook, InventoryStrings,
};

/// Inventory dialog session runner.
#[derive(Parser, Debug)]
#[command(name = "inventory-dialog", about = "Replay an inventory dialog session")]
struct Cli {
    /// Path to the dialog config (TOML). Missing file means defaults.
    #[arg(short = 'c', long = "config", default_value = "inventory-dialog.toml")]
    config: PathBuf,

    /// Session script, one JSON event per line.
    #[arg(short = 's', long = "script")]
    script: PathBuf,

    /// Overrides the configured locale.
    #[arg(long = "locale")]
    locale: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Loading configuration from {}", cli.config.display());
    let config = DialogConfig::load(&cli.config)?;
    let strings = InventoryStrings::new(cli.locale.as_deref().unwrap_or(&config.locale));

    let script = std::fs::read_to_string(&cli.script)?;
    let events = parse_script(&script)?;
    info!("Replaying {} events from {}", events.len(), cli.script.display());

    // Host-owned state: the product list and the book.
    let flux = Flux::new();
    flux.store().set(ProductList::PATH, ProductList(config.products.clone()));
    let catalog = FluxCatalog::new(Arc::clone(flux.store()));

    let host = Arc::new(BookHost::new(Arc::new(InventoryBook::new())));
    register_handlers(&flux, Arc::new(DialogContext::new(host.clone())));

    for event in &events {
        event.play(&flux, &host, &config.form_name).await?;
        let view = DialogView::build(&current_dialog(flux.store()), &catalog, &strings);
        println!("{}", serde_json::to_string(&view)?);
    }

    let all = host.book().find_all();
    info!("{} inventories stored", all.len());
    println!("{}", serde_json::to_string_pretty(&all)?);
    Ok(())
}
