use anyhow::Result;
use clap::Parser;
use env_logger::init;
use font2css_cli::cli::Cli;

fn main() -> Result<()> {
    init();
    Cli::parse().command.run()
}
