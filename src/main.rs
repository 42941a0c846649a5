use anyhow::Result;
use clap::Parser;
use slcsp::{find_slcsp, output::write_results, InputPaths};
use std::{io, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the second lowest cost Silver plan (SLCSP) for a list of ZIP codes"
)]
struct Args {
    /// Path to a custom "plans.csv" file
    #[arg(long, env = "SLCSP_PLANS", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/plans.csv"))]
    plans: PathBuf,
    /// Path to a custom "zips.csv" file
    #[arg(long, env = "SLCSP_ZIPS", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/zips.csv"))]
    zips: PathBuf,
    /// Path to a custom "slcsp.csv" file
    #[arg(long, env = "SLCSP_REQUEST", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/slcsp.csv"))]
    slcsp: PathBuf,
}

fn main() -> Result<()> {
    // stdout carries the answer, so logs go to stderr
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let paths = InputPaths {
        plans: args.plans,
        zips: args.zips,
        slcsp: args.slcsp,
    };
    info!(?paths, "startup");

    let results = find_slcsp(&paths)?;
    write_results(io::stdout().lock(), &results, true)?;

    info!(answered = results.len(), "all done");
    Ok(())
}
