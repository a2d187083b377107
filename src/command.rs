//! Command line parsing and logic

use crate::config::Config;
use crate::report;
use crate::scrape;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Bordspel {
    /// also log request details and skipped listings
    #[arg(short, long)]
    verbose: bool,

    /// don't print the price table at the end
    #[arg(long)]
    no_summary: bool,
}

impl Bordspel {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub async fn exec(self) -> color_eyre::Result<()> {
        let config = Config::default();
        let results = scrape::run(&config).await?;

        let total: usize = results.values().map(Vec::len).sum();
        info!(games = results.len(), listings = total, "scrape finished");

        if !self.no_summary {
            let df = report::summary(&results)?;
            println!("{}", &df);
        }

        Ok(())
    }
}
