use rsched::{write_json, DataSource, DemoSource};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Synthetic schedule generator
#[derive(Parser, Debug)]
#[command(name = "sched-datagen", version, about = "Writes synthetic resources and bookings")]
struct Args {
    /// Number of resource groups
    #[arg(long, default_value_t = 50)]
    parents: usize,

    /// Maximum resources per group
    #[arg(long, default_value_t = 10)]
    children: usize,

    /// Number of bookings
    #[arg(long, default_value_t = 2000)]
    bookings: usize,

    /// Bookings start within this many days of the anchor
    #[arg(long, default_value_t = 90)]
    days: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// First day of the generated range (YYYY-MM-DD), today by default
    #[arg(long)]
    anchor: Option<NaiveDate>,

    /// Output directory
    #[arg(short = 'o', long = "out", default_value = ".")]
    output_dir: PathBuf,

    /// Write Brotli-compressed files (*.json.br)
    #[arg(long)]
    brotli: bool,
}

impl Args {
    fn extension(&self) -> &'static str {
        if self.brotli {
            "json.br"
        } else {
            "json"
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let anchor = args.anchor.unwrap_or_else(rsched::dates::today);
    let source = DemoSource::with_config(args.parents, args.children, args.bookings, args.days, anchor, args.seed);
    let resources = source.fetch_resources()?;
    let bookings = source.fetch_bookings()?;

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let resources_path = args.output_dir.join(format!("resources.{}", args.extension()));
    let bookings_path = args.output_dir.join(format!("bookings.{}", args.extension()));

    write_json(&resources_path, &resources)?;
    write_json(&bookings_path, &bookings)?;

    log::info!(
        "Wrote {} groups ({} resources) to {} and {} bookings to {}",
        resources.len(),
        rsched::child_ids(&resources).len(),
        resources_path.display(),
        bookings.len(),
        bookings_path.display()
    );

    Ok(())
}
