//! Periodic snapshot refresh for networked mode.
//!
//! A `SnapshotRefresher` polls a `SnapshotSource` on a fixed interval and
//! publishes each fetched snapshot on a `watch` channel. The loop never
//! touches a session; the owner calls `apply_latest` when convenient, which
//! replaces the session wholesale. Only the newest snapshot is kept, so a
//! slow consumer simply skips intermediate ones.
//!
//! The first fetch happens immediately on spawn. Fetch failures are logged
//! and the loop keeps going. Cancelling (explicitly, via `shutdown`, or by
//! dropping the handle) stops the timer and aborts an in-flight fetch.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::{GameConfig, SnapshotError};
use crate::session::{GameSession, SessionSnapshot};

/// Where remote snapshots come from.
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    async fn fetch_snapshot(&self) -> Result<SessionSnapshot, SnapshotError>;
}

/// Handle to a running refresh loop.
#[derive(Debug)]
pub struct SnapshotRefresher {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SnapshotRefresher {
    /// Start polling `source` every `period`.
    ///
    /// Must be called inside a tokio runtime. A zero period is bumped to one
    /// millisecond.
    pub fn spawn<S: SnapshotSource>(
        source: S,
        period: Duration,
    ) -> (Self, watch::Receiver<Option<SessionSnapshot>>) {
        let period = period.max(Duration::from_millis(1));
        let (tx, rx) = watch::channel(None);
        let token = CancellationToken::new();

        let task = tokio::spawn(run(source, period, tx, token.clone()));
        info!(period_ms = period.as_millis() as u64, "snapshot refresh started");

        (
            Self {
                token,
                task: Some(task),
            },
            rx,
        )
    }

    /// Start polling at the configured refresh interval.
    pub fn spawn_with_config<S: SnapshotSource>(
        source: S,
        config: &GameConfig,
    ) -> (Self, watch::Receiver<Option<SessionSnapshot>>) {
        Self::spawn(source, config.refresh_interval())
    }

    /// Stop the loop without waiting for it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop the loop and wait for it to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "snapshot refresh task ended abnormally");
            }
        }
    }
}

impl Drop for SnapshotRefresher {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run<S: SnapshotSource>(
    source: S,
    period: Duration,
    tx: watch::Sender<Option<SessionSnapshot>>,
    token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            _ = token.cancelled() => break,
            fetched = source.fetch_snapshot() => fetched,
        };

        match fetched {
            Ok(snapshot) => {
                debug!(
                    current_turn = snapshot.current_turn_id.raw(),
                    table = snapshot.table_cards.len(),
                    time = snapshot.time,
                    "snapshot fetched"
                );
                if tx.send(Some(snapshot)).is_err() {
                    debug!("no snapshot receivers left");
                    break;
                }
            }
            Err(e) => warn!(error = %e, "snapshot fetch failed"),
        }
    }

    info!("snapshot refresh stopped");
}

/// Replace `session` with the newest unseen snapshot, if there is one.
///
/// Returns whether the session changed. A rejected snapshot is marked seen
/// and the session is left as it was. A value published just before the
/// refresh loop stopped is still applied.
pub fn apply_latest(
    session: &mut GameSession,
    rx: &mut watch::Receiver<Option<SessionSnapshot>>,
) -> Result<bool, SnapshotError> {
    // `has_changed` on the receiver errors once the sender is gone, even when
    // the last value was never read.
    let latest = {
        let value = rx.borrow_and_update();
        if !value.has_changed() {
            return Ok(false);
        }
        value.clone()
    };
    match latest {
        Some(snapshot) => {
            session.replace_with(&snapshot)?;
            info!(
                current_turn = snapshot.current_turn_id.raw(),
                time = snapshot.time,
                "snapshot applied"
            );
            Ok(true)
        }
        None => Ok(false),
    }
}
