//! Digest run orchestration
//!
//! A run goes through fixed phases, each finishing before the next starts:
//!
//! ```text
//! resolve date → load/read watchlist → [client: seed → fetch] → build → render → write
//! ```
//!
//! Everything that can fail locally (date validation, missing watchlist or
//! symbol file) is checked before the exchange client exists. The client
//! lives only inside the fetch block and is dropped before processing.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use jiff::{civil::Date, Zoned};
use log::info;
use scripwatch_core::{
    fetch_feeds, formatter, read_symbol_file, seed_watchlist, ClientBuilder, Digest, FormatKind,
    RecordFilter, Watchlist,
};

use crate::{args::Args, renderer::ReportWriter};

/// Where this run's watchlist comes from
enum WatchlistSource {
    Saved(Watchlist),
    /// Symbols to resolve and save before fetching
    Seed(Vec<String>),
}

/// One invocation of the digest
pub struct Cli {
    date: Date,
    format: FormatKind,
    watchlist_path: PathBuf,
    symbol_file: Option<PathBuf>,
    api_url: Option<String>,
    writer: ReportWriter,
    filter: RecordFilter,
}

impl Cli {
    /// Validate arguments against `today` without touching the network.
    pub fn new(args: Args, today: Date) -> Result<Self> {
        let date = args
            .report_date()
            .resolve(today)
            .context("Invalid report date")?;
        let format = args.format_kind(io::stdout().is_terminal());

        let watchlist_path = match args.watchlist {
            Some(path) => path,
            None => Watchlist::default_path().context("Failed to locate watchlist")?,
        };

        Ok(Self {
            date,
            format,
            watchlist_path,
            symbol_file: args.file,
            api_url: args.api_url,
            writer: ReportWriter::new(args.out),
            filter: RecordFilter::default(),
        })
    }

    /// Build a runner for today's local date.
    pub fn for_today(args: Args) -> Result<Self> {
        Self::new(args, Zoned::now().date())
    }

    /// Run the digest end to end.
    pub async fn run(self) -> Result<()> {
        let source = match &self.symbol_file {
            Some(path) => WatchlistSource::Seed(
                read_symbol_file(path)
                    .with_context(|| format!("Failed to read symbols from {}", path.display()))?,
            ),
            None => WatchlistSource::Saved(
                Watchlist::load(&self.watchlist_path).context("Failed to load watchlist")?,
            ),
        };

        info!("Building digest for {}", self.date);

        let (watchlist, feeds) = {
            let client = ClientBuilder::new()
                .with_api_url(self.api_url.clone())
                .build()
                .context("Failed to create exchange client")?;

            let watchlist = match source {
                WatchlistSource::Saved(watchlist) => watchlist,
                WatchlistSource::Seed(symbols) => {
                    let watchlist = seed_watchlist(&client, &symbols)
                        .await
                        .context("Failed to generate watchlist")?;
                    watchlist
                        .save(&self.watchlist_path)
                        .context("Failed to save watchlist")?;
                    info!("Watchlist saved to {}", self.watchlist_path.display());
                    watchlist
                }
            };

            let feeds = fetch_feeds(&client, &watchlist, self.date)
                .await
                .context("Failed to fetch exchange data")?;

            (watchlist, feeds)
        };

        let digest = Digest::build(self.date, &watchlist, feeds, &self.filter);
        let mut fmt = formatter(self.format);
        let report = digest.render(fmt.as_mut());

        self.writer.write(&report)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;

    fn args(extra: &[&str], temp_dir: &TempDir) -> Args {
        let watchlist = temp_dir.path().join("watchlist.json");
        let mut argv = vec!["scripwatch", "-w", watchlist.to_str().expect("utf-8 path")];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("Failed to parse arguments")
    }

    #[test]
    fn test_future_date_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let today = date(2025, 10, 24);

        let err = Cli::new(args(&["-d", "2025-10-25"], &temp_dir), today)
            .err()
            .expect("Future date should be rejected");
        assert!(format!("{err:#}").contains("date"));
    }

    #[test]
    fn test_days_back_resolved() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cli = Cli::new(args(&["-p", "3", "--fmt", "md"], &temp_dir), date(2025, 10, 24))
            .expect("Failed to build runner");

        assert_eq!(cli.date, date(2025, 10, 21));
        assert_eq!(cli.format, FormatKind::Markdown);
        assert_eq!(cli.watchlist_path, temp_dir.path().join("watchlist.json"));
    }

    #[tokio::test]
    async fn test_missing_watchlist_fails_before_fetch() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // nothing listens here, so reaching the network would fail differently
        let cli = Cli::new(
            args(&["--api-url", "http://127.0.0.1:1"], &temp_dir),
            date(2025, 10, 24),
        )
        .expect("Failed to build runner");

        let err = cli.run().await.expect_err("Run should fail");
        assert!(format!("{err:#}").contains("Use -f to generate watchlist.json"));
    }
}
