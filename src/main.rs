use clap::Parser;
use std::path::PathBuf;

use xorg_reconcile::config::ReconcileConfig;

#[derive(Parser)]
#[command(name = "xorg-reconcile")]
#[command(version, about = "Diffs an X.org release listing against a local package tree")]
struct Cli {
    /// Package tree to reconcile
    #[arg(long, default_value = "package/x11r7")]
    tree: PathBuf,

    /// Release identifier to fetch (e.g. "X11R7.7")
    #[arg(long)]
    release: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // The report goes to stdout; keep diagnostics on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ReconcileConfig::default();
    if let Some(release) = cli.release {
        config.release = release;
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(xorg_reconcile::app::run(config, &cli.tree))
}
