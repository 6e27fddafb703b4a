//! Periodic portfolio refresh.
//!
//! [`RefreshTask`] owns a single tokio task that polls a [`HoldingsSource`]
//! on a fixed interval and publishes a [`DashboardState`] through a watch
//! channel. Refreshes never overlap: the fetch is awaited inside the loop and
//! ticks missed while it is in flight are skipped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::error::{FeedError, FeedResult};
use crate::snapshot::{DashboardState, PortfolioSnapshot};
use crate::source::HoldingsSource;

/// Fetch holdings once and build a snapshot from them.
///
/// Consistency warnings are logged and carried in the snapshot; they never
/// fail the refresh.
pub async fn refresh_once(source: &dyn HoldingsSource) -> FeedResult<PortfolioSnapshot> {
    let holdings = source.fetch_holdings().await?;
    let snapshot = PortfolioSnapshot::now(&holdings);

    for warning in &snapshot.warnings {
        warn!("Data quality: {}", warning);
    }
    debug!(
        "Refreshed {} holdings in {} sectors from {}",
        snapshot.summary.holding_count,
        snapshot.summary.sector_count,
        source.describe()
    );

    Ok(snapshot)
}

/// Spawns the refresh loop.
pub struct RefreshTask;

impl RefreshTask {
    /// Start polling `source` every `period`. The first refresh runs immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn HoldingsSource>, period: Duration) -> FeedResult<RefreshHandle> {
        if period.is_zero() {
            return Err(FeedError::Config(
                "refresh interval must be positive".to_string(),
            ));
        }

        let (state_tx, state_rx) = watch::channel(DashboardState::default());
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

        info!(
            "Starting {} refresh of {} every {:?}",
            source.source_type(),
            source.describe(),
            period
        );
        let task = tokio::spawn(run_loop(source, period, state_tx, shutdown_rx));

        Ok(RefreshHandle {
            state_rx,
            shutdown_tx,
            task: Some(task),
        })
    }
}

async fn run_loop(
    source: Arc<dyn HoldingsSource>,
    period: Duration,
    state_tx: watch::Sender<DashboardState>,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown_rx.recv() => {
                info!("Refresh task shutting down");
                break;
            }
        }

        let result = tokio::select! {
            result = refresh_once(source.as_ref()) => result,
            _ = shutdown_rx.recv() => {
                info!("Refresh task shutting down, abandoning in-flight fetch");
                break;
            }
        };

        match result {
            Ok(snapshot) => {
                state_tx.send_modify(|state| state.record_success(snapshot));
            }
            Err(e) => {
                state_tx.send_modify(|state| state.record_failure(e.to_string()));
                let failures = state_tx.borrow().consecutive_failures;
                warn!(
                    "Refresh from {} failed ({} in a row): {}",
                    source.describe(),
                    failures,
                    e
                );
            }
        }
    }
}

/// Owner of a running refresh task.
///
/// Dropping the handle stops the task.
pub struct RefreshHandle {
    state_rx: watch::Receiver<DashboardState>,
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Receiver notified after every refresh attempt.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_rx.clone()
    }

    /// Latest dashboard state.
    pub fn state(&self) -> DashboardState {
        self.state_rx.borrow().clone()
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stop the task, interrupting an in-flight fetch, and wait for it to exit.
    pub async fn stop(mut self) -> FeedResult<()> {
        let _ = self.shutdown_tx.send(());
        match self.task.take() {
            Some(task) => task.await.map_err(|e| FeedError::Task(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            let _ = self.shutdown_tx.send(());
        }
    }
}
