use std::path::PathBuf;

use clap::Parser;
use sortvis_core::Algorithm;

use super::logging::LogDestination;

#[derive(Debug, Clone, Parser)]
#[command(name = "sortvis", version, about = "Animate sorting algorithms as text bars")]
pub struct Cli {
    /// bubble, selection, insertion, merge or quick.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Number of bars to generate.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Speed 1..=200; higher is faster.
    #[arg(long)]
    pub speed: Option<u32>,

    /// Seed for the random bar heights.
    #[arg(long)]
    pub seed: Option<u64>,

    /// RON settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the animation and only print the result.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final run report as JSON.
    #[arg(long)]
    pub json: bool,
}
