use clap::{Parser, ValueEnum};
use quote_pages::Termination;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quote-pages")]
#[command(about = "Scrapes paginated quote listings into CSV")]
#[command(version)]
pub struct Args {
    /// Output CSV file for quotes
    pub output: PathBuf,

    /// Also resolve author biographies and write them to this CSV file
    #[arg(long)]
    pub authors: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How to detect the last page (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub termination: Option<TerminationArg>,

    /// Stop after this many listing pages
    #[arg(long)]
    pub max_pages: Option<u32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TerminationArg {
    /// Follow the "next" link until there is none
    Link,
    /// Request page numbers until one comes back empty
    Probe,
}

/// Convert from CLI argument policy to the library policy
pub fn convert_termination(arg: TerminationArg) -> Termination {
    match arg {
        TerminationArg::Link => Termination::Link,
        TerminationArg::Probe => Termination::Probe,
    }
}
