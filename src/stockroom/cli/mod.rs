//! # CLI Layer
//!
//! One possible UI client for stockroom, and the only place that knows about the
//! terminal, exit codes and argument parsing.
//!
//! Without a subcommand the operator gets the interactive [`menu`]. The subcommands
//! expose the same actions for scripts; they print the same tables and messages and
//! exit non-zero when the action fails.

mod menu;
mod render;
mod setup;

use clap::Parser;
use menu::Menu;
use render::{print_messages, render_products, render_summary};
use setup::{Cli, Commands, SortField};
use std::io;
use std::path::PathBuf;
use stockroom::api::{CmdResult, InventoryApi};
use stockroom::config::StockConfig;
use stockroom::diagnostics::{NullSink, StdoutSink};
use stockroom::error::{Result, StockError};
use stockroom::model::Product;
use stockroom::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: InventoryApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_menu(&mut ctx),
        Some(Commands::Add {
            id,
            name,
            quantity,
            price,
        }) => handle_add(&mut ctx, Product::new(id, name, quantity, price)),
        Some(Commands::List) => handle_list(&ctx, None),
        Some(Commands::Update {
            old_id,
            id,
            name,
            quantity,
            price,
        }) => handle_update(&mut ctx, old_id, id, name, quantity, price),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Sorted { by }) => handle_list(&ctx, Some(by)),
        Some(Commands::Summary) => handle_summary(&ctx),
    }
}

/// Logs go to stderr so they never interleave with tables on stdout.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = StockConfig::load(&cwd)?.with_overrides(cli.file.clone(), cli.quiet);
    debug!(data_file = %config.data_file.display(), "resolved configuration");

    let store = FileStore::new(config.data_file.clone());
    let store = if config.diagnostics {
        store.with_sink(StdoutSink)
    } else {
        store.with_sink(NullSink)
    };

    let mut api = InventoryApi::new(store);
    // Refusing to create the catalog file is the one fatal error.
    api.init()?;

    Ok(AppContext { api })
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    Menu::new(&mut ctx.api, stdin.lock(), io::stdout().lock()).run()?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, product: Product) -> Result<()> {
    let result = ctx.api.add_product(product);
    finish(result)
}

fn handle_update(
    ctx: &mut AppContext,
    old_id: i64,
    id: Option<i64>,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<()> {
    let Some(current) = ctx.api.get_product(old_id)?.listed_products.pop() else {
        return Err(StockError::NotFound(old_id));
    };

    let replacement = Product::new(
        id.unwrap_or(current.id),
        name.unwrap_or(current.name),
        quantity.unwrap_or(current.quantity),
        price.unwrap_or(current.price),
    );
    let result = ctx.api.update_product(old_id, replacement);
    finish(result)
}

fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.delete_product(id);
    finish(result)
}

fn handle_list(ctx: &AppContext, sort: Option<SortField>) -> Result<()> {
    let (result, title) = match sort {
        None => (ctx.api.list_products(), None),
        Some(SortField::Name) => (ctx.api.sorted_by_name(), Some("Sorted by Name:")),
        Some(SortField::Price) => (ctx.api.sorted_by_price(), Some("Sorted by Price:")),
    };
    let result = result?;
    print!("{}", render_products(&result.listed_products, title));
    Ok(())
}

fn handle_summary(ctx: &AppContext) -> Result<()> {
    if let Some(summary) = ctx.api.summary()?.summary {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

/// Prints the confirmation of a successful write. Failures bubble up to `main`,
/// which prints them on stderr and exits non-zero.
fn finish(result: Result<CmdResult>) -> Result<()> {
    let result = result?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}
