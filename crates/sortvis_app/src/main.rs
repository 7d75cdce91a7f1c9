mod terminal;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    terminal::run_app(terminal::Cli::parse())
}
