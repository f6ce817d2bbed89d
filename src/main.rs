use clap::Parser;
use quote_pages::output::write_records_to_path;
use quote_pages::{Harvest, HarvestConfig};

mod args;
use args::{Args, convert_termination};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let start_time = std::time::Instant::now();

    if let Err(e) = run(&args).await {
        ::log::error!("Harvest failed: {}", e);
        std::process::exit(1);
    }

    ::log::info!(
        "Harvest complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

async fn run(args: &Args) -> quote_pages::Result<()> {
    let config = match &args.config {
        Some(path) => HarvestConfig::from_file(path)?,
        None => HarvestConfig::default(),
    }
    .with_env_overrides();

    let mut harvest = Harvest::new(config).with_authors(args.authors.is_some());
    if let Some(termination) = args.termination {
        harvest = harvest.with_termination(convert_termination(termination));
    }
    if let Some(max_pages) = args.max_pages {
        harvest = harvest.with_max_pages(max_pages);
    }

    ::log::info!("Writing quotes to {}", args.output.display());

    let output = harvest.run().await?;

    write_records_to_path(&args.output, &output.quotes)?;
    if let Some(path) = &args.authors {
        write_records_to_path(path, &output.authors)?;
    }

    Ok(())
}
