//! Storefront CLI - browse the paginated product catalog from a terminal.
//!
//! Commands:
//! - `storefront list` - Page through the catalog ("load more" in a loop)
//! - `storefront show <id>` - Look up a single product
//! - `storefront demo` - Scripted cart walkthrough over live catalog data

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_data::HttpCatalog;
use tracing_subscriber::EnvFilter;

use commands::{DemoArgs, ListArgs, ShowArgs};

/// Storefront CLI - browse products and manage a session cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the product catalog API
    #[arg(long, global = true, default_value = HttpCatalog::DEFAULT_BASE_URL)]
    api_url: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products, fetching pages until a target is reached
    List(ListArgs),

    /// Show a single product by id
    Show(ShowArgs),

    /// Run a scripted cart walkthrough against live catalog data
    Demo(DemoArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let catalog = HttpCatalog::new(&cli.api_url);

    match cli.command {
        Commands::List(args) => commands::list::run(args, &catalog, &output).await,
        Commands::Show(args) => commands::show::run(args, &catalog, &output).await,
        Commands::Demo(args) => commands::demo::run(args, &catalog, &output).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "storefront_data=debug,storefront_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
