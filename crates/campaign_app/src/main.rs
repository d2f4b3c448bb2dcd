mod platform;

use std::path::PathBuf;

use clap::Parser;

/// Browse the campaign catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "campaigns", version)]
struct Args {
    /// RON catalog of campaigns.
    #[arg(long)]
    catalog: PathBuf,
    /// RON site settings; defaults apply when the file is absent.
    #[arg(long, default_value = "site.ron")]
    config: PathBuf,
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    platform::run_app(platform::LaunchOptions {
        catalog: args.catalog,
        config: args.config,
        script: args.script,
    })
}
