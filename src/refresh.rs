//! Periodic fetch-merge cycle with change detection.
//!
//! A single poller task owns the [`RefreshCycle`] and runs one cycle at a
//! time. Timer ticks that fire while a cycle is in flight are skipped, and
//! manual refresh requests received during a cycle collapse into a single
//! follow-up cycle.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::client::ScoreSource;
use crate::error::Result;
use crate::merge::merge;
use crate::models::MergedActivity;

/// Result of a successful cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The merged list differs from the last accepted one and replaced it
    Changed(Vec<MergedActivity>),
    Unchanged,
}

/// Fetch/merge state machine holding the last accepted snapshot
#[derive(Debug, Default)]
pub struct RefreshCycle {
    last_accepted: Option<Vec<MergedActivity>>,
}

impl RefreshCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_accepted(&self) -> Option<&[MergedActivity]> {
        self.last_accepted.as_deref()
    }

    /// Run one cycle against `source`
    ///
    /// On error the snapshot is left untouched.
    pub async fn run(&mut self, source: &dyn ScoreSource) -> Result<CycleOutcome> {
        let reads = source.activity_reads().await?;
        debug!(count = reads.len(), "activity reads fetched");

        let (homework, exams) = tokio::try_join!(source.homework_titles(), source.exam_titles())?;
        debug!(homework = homework.len(), exams = exams.len(), "title lookups fetched");

        let merged = merge(&exams, &homework, &reads);
        Ok(self.accept(merged))
    }

    /// Replace the snapshot if `merged` differs from it
    pub fn accept(&mut self, merged: Vec<MergedActivity>) -> CycleOutcome {
        if self.last_accepted.as_ref() == Some(&merged) {
            return CycleOutcome::Unchanged;
        }
        self.last_accepted = Some(merged.clone());
        CycleOutcome::Changed(merged)
    }
}

/// Messages from the poller to the UI
#[derive(Debug, Clone)]
pub enum PollerEvent {
    Refreshing,
    /// A cycle completed; `activities` is set only when the list changed
    Refreshed {
        activities: Option<Vec<MergedActivity>>,
        at: DateTime<Local>,
    },
    /// A cycle was aborted; the display keeps its previous content
    Aborted,
}

/// Handle to the background poller
pub struct Poller {
    pub events: mpsc::UnboundedReceiver<PollerEvent>,
    requests: mpsc::UnboundedSender<()>,
    task: JoinHandle<()>,
}

impl Poller {
    /// Spawn the poller; the first cycle starts immediately
    pub fn spawn(source: Arc<dyn ScoreSource>, period: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(poll_loop(source, period, event_tx, request_rx));

        Self {
            events: event_rx,
            requests: request_tx,
            task,
        }
    }

    /// Ask for an out-of-schedule cycle
    pub fn request_refresh(&self) {
        let _ = self.requests.send(());
    }

    pub fn shutdown(self) {
        self.task.abort();
    }
}

async fn poll_loop(
    source: Arc<dyn ScoreSource>,
    period: Duration,
    events: mpsc::UnboundedSender<PollerEvent>,
    mut requests: mpsc::UnboundedReceiver<()>,
) {
    let mut cycle = RefreshCycle::new();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut follow_up = false;

    loop {
        if follow_up {
            info!("running coalesced manual refresh");
        } else {
            tokio::select! {
                _ = ticker.tick() => {}
                request = requests.recv() => {
                    if request.is_none() {
                        break;
                    }
                    info!("manual refresh requested");
                    // Next scheduled cycle is one full period after this one
                    ticker.reset();
                }
            }
        }

        if events.send(PollerEvent::Refreshing).is_err() {
            break;
        }
        let event = run_logged(&mut cycle, source.as_ref()).await;

        // Requests that piled up during the cycle collapse into one more cycle
        follow_up = false;
        while requests.try_recv().is_ok() {
            follow_up = true;
        }
        if follow_up {
            ticker.reset();
        }

        if events.send(event).is_err() {
            break;
        }
    }

    debug!("poller stopped");
}

async fn run_logged(cycle: &mut RefreshCycle, source: &dyn ScoreSource) -> PollerEvent {
    match cycle.run(source).await {
        Ok(CycleOutcome::Changed(activities)) => {
            info!(count = activities.len(), "scores changed");
            PollerEvent::Refreshed {
                activities: Some(activities),
                at: Local::now(),
            }
        }
        Ok(CycleOutcome::Unchanged) => {
            debug!("scores unchanged");
            PollerEvent::Refreshed {
                activities: None,
                at: Local::now(),
            }
        }
        Err(err) => {
            error!(error = %err, "refresh cycle aborted");
            PollerEvent::Aborted
        }
    }
}
