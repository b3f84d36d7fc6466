use anyhow::Result;
use clap::Parser;
use hubkit::menu;
use hubkit::store::FileTokenStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hubkit")]
#[command(about = "An interactive terminal menu for GitHub utilities")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics stay on stderr and stay silent unless RUST_LOG opts in;
    // the menu owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let store = FileTokenStore::default_location()?;
    menu::run(&store).await
}
