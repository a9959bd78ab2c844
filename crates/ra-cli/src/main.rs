//! Generate a random artifact set and print a spoiler listing.
//!
//! Diagnostics from the engine (soft convergence failures, batch restarts)
//! go through tracing; set RUST_LOG=ra_core=debug to watch a run converge.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ra_core::{data, generate, ItemCatalog, PowerModel, StandardPowerModel};

#[derive(Parser)]
#[command(name = "ra-cli", about = "Random artifact set generator")]
struct Args {
    /// Seed for the generation run
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Only randomize names, leaving every artifact's powers untouched
    #[arg(long)]
    names_only: bool,

    /// Emit the full set as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

fn flag_summary(art: &ra_core::Artifact) -> String {
    let mut parts = Vec::new();
    if !art.power_flags.is_empty() {
        parts.push(format!("{:?}", art.power_flags));
    }
    if !art.prot_flags.is_empty() {
        parts.push(format!("{:?}", art.prot_flags));
    }
    if !art.misc_flags.is_empty() {
        parts.push(format!("{:?}", art.misc_flags));
    }
    parts.join(" | ")
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog: ItemCatalog = data::standard_catalog();
    let corpus = data::standard_corpus(&catalog);
    let model = StandardPowerModel;

    let arts = generate(&corpus, &catalog, &model, args.seed, !args.names_only)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&arts)?);
        return Ok(());
    }

    println!("Random artifact set (seed {})", args.seed);
    println!();
    for art in &arts {
        let kind = catalog
            .lookup(art.category, art.subtype)
            .map(|k| k.name)
            .unwrap_or("?");
        let power = catalog
            .lookup(art.category, art.subtype)
            .map(|k| model.power(art, k))
            .unwrap_or(0);
        println!(
            "{:<28} {:<26} power {:>5}  pval {:+3}  [{:+},{:+},{:+}]",
            art.name, kind, power, art.pval, art.to_h, art.to_d, art.to_a
        );
        let flags = flag_summary(art);
        if !flags.is_empty() {
            println!("    {flags}");
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
