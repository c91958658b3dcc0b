//! The fetch phase of a digest run.

use jiff::civil::Date;
use log::{debug, info};

use super::BseClient;
use crate::{
    error::Result,
    models::{Announcement, CorporateAction, ResultEntry},
    watchlist::Watchlist,
};

/// Everything fetched from the exchange for one report.
#[derive(Debug, Clone, Default)]
pub struct Feeds {
    pub announcements: Vec<Announcement>,
    pub actions: Vec<CorporateAction>,
    pub results: Vec<ResultEntry>,
}

/// Fetch actions, the result calendar and each watched symbol's
/// announcements for `date`, one request at a time.
///
/// # Errors
///
/// The first failed request aborts the whole fetch.
pub async fn fetch_feeds(client: &BseClient, watchlist: &Watchlist, date: Date) -> Result<Feeds> {
    info!("Fetching corporate actions");
    let actions = client.actions().await?;

    info!("Fetching result calendar");
    let results = client.result_calendar().await?;

    info!("Fetching announcements for {} symbols", watchlist.len());
    let mut announcements = Vec::new();
    for (code, symbol) in watchlist.iter() {
        debug!("Fetching announcements for {symbol} ({code})");
        announcements.extend(client.announcements(date, date, code).await?);
    }

    info!(
        "Fetched {} announcements, {} actions, {} result dates",
        announcements.len(),
        actions.len(),
        results.len()
    );

    Ok(Feeds {
        announcements,
        actions,
        results,
    })
}

/// Build a fresh watchlist by resolving every symbol to its scrip code.
///
/// # Errors
///
/// Fails on the first symbol the exchange cannot resolve.
pub async fn seed_watchlist(client: &BseClient, symbols: &[String]) -> Result<Watchlist> {
    let mut watchlist = Watchlist::new();

    for symbol in symbols {
        let code = client.scrip_code(symbol).await?;
        debug!("Resolved {symbol} to {code}");
        watchlist.insert(code, symbol.as_str());
    }

    info!("Seeded watchlist with {} symbols", watchlist.len());
    Ok(watchlist)
}
