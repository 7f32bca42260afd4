//! sw6 Order Sync
//!
//! Pulls every open sw6 order into the bridge, one request at a time.

use crate::api::BridgeApi;
use crate::error::Failure;
use crate::notify::{escape_html, Notifier, Severity};

/// Progress shown once the open order ids are known
const LISTED_PROGRESS: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSyncSummary {
    pub synced: usize,
    pub failed: usize,
}

fn percent(done: usize, total: usize) -> u8 {
    (done * 100 / total.max(1)).min(100) as u8
}

/// Sync all open orders in sequence.
///
/// `on_progress` gets the completion in percent while running and `None`
/// once the run is over, on every path. Returns `None` when the open orders
/// could not be listed.
pub async fn sync_open_orders<A, N, P>(api: &A, notifier: &N, on_progress: P) -> Option<OrderSyncSummary>
where
    A: BridgeApi,
    N: Notifier,
    P: Fn(Option<u8>),
{
    on_progress(Some(0));
    let listing = match api.fetch_open_order_ids().await {
        Ok(listing) => listing,
        Err(err) => {
            log::error!("fetching open orders failed: {}", err);
            notifier.error(&Failure::OrderSync.message(&err));
            on_progress(None);
            return None;
        }
    };
    notifier.notify(Severity::from_status(&listing.report.status), listing.report.message_text());
    on_progress(Some(LISTED_PROGRESS));

    let ids = &listing.order_ids.data;
    let total = listing.order_ids.total.max(ids.len());
    log::info!("syncing {} open orders", ids.len());

    let mut summary = OrderSyncSummary::default();
    for (index, order_id) in ids.iter().enumerate() {
        if sync_one(api, notifier, order_id).await {
            summary.synced += 1;
        } else {
            summary.failed += 1;
        }
        on_progress(Some(percent(index + 1, total)));
    }

    log::info!("order sync done: {} synced, {} failed", summary.synced, summary.failed);
    notifier.success(listing.report.message_text());
    on_progress(None);
    Some(summary)
}

async fn sync_one<A, N>(api: &A, notifier: &N, order_id: &str) -> bool
where
    A: BridgeApi,
    N: Notifier,
{
    match api.sync_order_to_bridge(order_id).await {
        Ok(report) => {
            notifier.notify(Severity::from_status(&report.status), report.message_text());
            report.is_success()
        }
        Err(err) => {
            log::error!("order {} sync failed: {}", order_id, err);
            notifier.error(&format!("Fehler beim Synchronisieren der Bestellung {}.", escape_html(order_id)));
            false
        }
    }
}
