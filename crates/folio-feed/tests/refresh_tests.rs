//! Refresh task tests on paused tokio time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folio_core::Holding;
use folio_feed::{
    FeedError, FeedResult, HoldingsSource, RefreshTask, SourceType, StaticHoldingsSource,
};

const PERIOD: Duration = Duration::from_secs(15);

fn holdings() -> Vec<Holding> {
    vec![
        Holding::builder()
            .id("h1")
            .sector("Tech")
            .investment(dec!(100))
            .present_value(dec!(120))
            .gain_loss(dec!(20))
            .build()
            .unwrap(),
        Holding::builder()
            .id("h2")
            .investment(dec!(50))
            .present_value(dec!(40))
            .gain_loss(dec!(-10))
            .build()
            .unwrap(),
    ]
}

/// Replays scripted outcomes, then keeps succeeding.
struct ScriptedSource {
    script: Mutex<Vec<bool>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(outcomes: &[bool]) -> Self {
        let mut script = outcomes.to_vec();
        script.reverse();
        Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HoldingsSource for ScriptedSource {
    fn source_type(&self) -> SourceType {
        SourceType::Static
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }

    async fn fetch_holdings(&self) -> FeedResult<Vec<Holding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let ok = self.script.lock().unwrap().pop().unwrap_or(true);
        if ok {
            Ok(holdings())
        } else {
            Err(FeedError::Transport("connection refused".to_string()))
        }
    }
}

/// Takes `delay` per fetch and records how many fetches overlap.
struct SlowSource {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    completed: AtomicUsize,
}

impl SlowSource {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HoldingsSource for SlowSource {
    fn source_type(&self) -> SourceType {
        SourceType::Static
    }

    fn describe(&self) -> String {
        "slow".to_string()
    }

    async fn fetch_holdings(&self) -> FeedResult<Vec<Holding>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(holdings())
    }
}

#[tokio::test(start_paused = true)]
async fn test_first_refresh_is_immediate() {
    let source = Arc::new(StaticHoldingsSource::new(holdings()));
    let handle = RefreshTask::start(source, PERIOD).unwrap();
    assert!(handle.state().is_loading());

    let start = tokio::time::Instant::now();
    let mut updates = handle.subscribe();
    updates.changed().await.unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));

    let state = handle.state();
    let snapshot = state.snapshot.unwrap();
    assert_eq!(snapshot.groups.len(), 2);
    assert_eq!(snapshot.groups[0].sector_name(), "Tech");
    assert_eq!(snapshot.groups[1].sector_name(), "Other");
    assert_eq!(snapshot.summary.total_gain_loss, dec!(10));
    assert_eq!(state.refresh_count, 1);
    assert!(!handle.is_finished());

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_refreshes_on_interval() {
    let source = Arc::new(ScriptedSource::new(&[]));
    let handle = RefreshTask::start(source.clone(), PERIOD).unwrap();
    let mut updates = handle.subscribe();

    updates.wait_for(|s| s.refresh_count >= 3).await.unwrap();
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);

    tokio::time::sleep(PERIOD * 2 + Duration::from_secs(1)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 5);

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_previous_snapshot() {
    let source = Arc::new(ScriptedSource::new(&[true, false, false, true]));
    let handle = RefreshTask::start(source, PERIOD).unwrap();
    let mut updates = handle.subscribe();

    updates.wait_for(|s| s.refresh_count == 1).await.unwrap();
    let good = handle.state().snapshot.unwrap();

    updates.wait_for(|s| s.refresh_count == 3).await.unwrap();
    let state = handle.state();
    assert!(state.is_stale());
    assert_eq!(state.consecutive_failures, 2);
    assert_eq!(state.snapshot.as_ref(), Some(&good));
    assert!(state
        .last_error
        .as_deref()
        .is_some_and(|e| e.contains("connection refused")));

    updates.wait_for(|s| s.refresh_count == 4).await.unwrap();
    let state = handle.state();
    assert!(!state.is_stale());
    assert_eq!(state.consecutive_failures, 0);
    assert!(state.last_error.is_none());

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_failure_before_first_snapshot_stays_loading() {
    let source = Arc::new(ScriptedSource::new(&[false]));
    let handle = RefreshTask::start(source, PERIOD).unwrap();
    let mut updates = handle.subscribe();

    updates.wait_for(|s| s.refresh_count == 1).await.unwrap();
    let state = handle.state();
    assert!(state.is_loading());
    assert!(state.last_error.is_some());

    updates.wait_for(|s| !s.is_loading()).await.unwrap();
    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_figures_keep_task_alive() {
    let huge: Vec<Holding> = (0..3)
        .map(|i| {
            Holding::builder()
                .id(format!("big{i}"))
                .sector("Tech")
                .investment(Decimal::MAX)
                .present_value(Decimal::MIN)
                .build()
                .unwrap()
        })
        .collect();
    let handle = RefreshTask::start(Arc::new(StaticHoldingsSource::new(huge)), PERIOD).unwrap();
    let mut updates = handle.subscribe();

    updates.wait_for(|s| s.refresh_count >= 2).await.unwrap();
    assert!(!handle.is_finished());

    let snapshot = handle.state().snapshot.unwrap();
    assert_eq!(snapshot.summary.total_investment, Decimal::MAX);
    assert_eq!(snapshot.summary.total_gain_loss, Decimal::MIN);

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetches_never_overlap() {
    let source = Arc::new(SlowSource::new(Duration::from_secs(40)));
    let handle = RefreshTask::start(source.clone(), PERIOD).unwrap();

    tokio::time::sleep(Duration::from_secs(300)).await;

    assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    let completed = source.completed.load(Ordering::SeqCst);
    assert!(completed >= 2, "completed {completed}");
    assert!(completed <= 300 / 40, "completed {completed}");

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_interrupts_in_flight_fetch() {
    let source = Arc::new(SlowSource::new(Duration::from_secs(3600)));
    let handle = RefreshTask::start(source.clone(), PERIOD).unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(source.in_flight.load(Ordering::SeqCst), 1);

    let start = tokio::time::Instant::now();
    handle.stop().await.unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(source.completed.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_task() {
    let source = Arc::new(ScriptedSource::new(&[]));
    let weak = Arc::downgrade(&source);
    let handle = RefreshTask::start(source.clone(), PERIOD).unwrap();
    drop(source);

    let mut updates = handle.subscribe();
    updates.changed().await.unwrap();
    drop(handle);

    tokio::time::sleep(PERIOD * 4).await;
    assert!(weak.upgrade().is_none(), "refresh task still holds the source");
}
