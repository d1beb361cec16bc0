//! The one recurring job in the system: a one-second countdown tick.
//!
//! [`TickScheduler`] is the seam between the journal and the clock.
//! [`IntervalTicker`] backs it with a tokio interval task; [`ManualTicker`]
//! lets callers deliver ticks themselves.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Cancellable recurring tick.
pub trait TickScheduler {
    /// Cancel any outstanding tick, then schedule a fresh recurring one
    /// whose first firing is one period from now.
    fn arm(&mut self);

    /// Cancel the outstanding tick, if any.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Scheduler that never fires on its own. Records what was asked of it.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    armed: bool,
    arm_count: usize,
    disarm_count: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn disarm_count(&self) -> usize {
        self.disarm_count
    }
}

impl TickScheduler for ManualTicker {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        if self.armed {
            self.disarm_count += 1;
        }
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

/// A tick delivered by [`IntervalTicker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

/// Tokio-backed scheduler.
///
/// Must be armed from inside a tokio runtime. Each `arm` and `disarm` bumps
/// a generation counter; [`TickReceiver::recv`] drops ticks minted under an
/// older generation, so a tick already queued when the countdown stopped
/// can never revive it.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    tx: mpsc::UnboundedSender<Tick>,
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

/// Receiving half of an [`IntervalTicker`].
#[derive(Debug)]
pub struct TickReceiver {
    rx: mpsc::UnboundedReceiver<Tick>,
    generation: Arc<AtomicU64>,
}

impl IntervalTicker {
    /// One-second ticker.
    pub fn new() -> (Self, TickReceiver) {
        Self::with_period(Duration::from_secs(1))
    }

    pub fn with_period(period: Duration) -> (Self, TickReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let generation = Arc::new(AtomicU64::new(0));
        let ticker = Self {
            period,
            tx,
            generation: Arc::clone(&generation),
            task: None,
        };
        (ticker, TickReceiver { rx, generation })
    }

    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl TickScheduler for IntervalTicker {
    fn arm(&mut self) {
        self.disarm();
        let generation = self.bump_generation();
        let tx = self.tx.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, "tick armed");
    }

    fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let generation = self.bump_generation();
            tracing::debug!(generation, "tick disarmed");
        }
    }

    fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl TickReceiver {
    /// Wait for the next tick of the current generation.
    ///
    /// Returns `None` once the ticker has been dropped.
    pub async fn recv(&mut self) -> Option<Tick> {
        loop {
            let tick = self.rx.recv().await?;
            if tick.generation == self.generation.load(Ordering::SeqCst) {
                return Some(tick);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_ticker_counts_transitions() {
        let mut ticker = ManualTicker::new();
        ticker.disarm();
        assert_eq!(ticker.disarm_count(), 0);
        ticker.arm();
        ticker.arm();
        assert!(ticker.is_armed());
        ticker.disarm();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.arm_count(), 2);
        assert_eq!(ticker.disarm_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_fires_until_disarmed() {
        let (mut ticker, mut ticks) = IntervalTicker::new();
        ticker.arm();
        assert!(ticker.is_armed());
        for _ in 0..3 {
            assert!(ticks.recv().await.is_some());
        }

        ticker.disarm();
        assert!(!ticker.is_armed());
        let waited = tokio::time::timeout(Duration::from_secs(5), ticks.recv()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_drops_queued_ticks() {
        let (mut ticker, mut ticks) = IntervalTicker::new();
        ticker.arm();
        // Let a few ticks pile up unread.
        tokio::time::sleep(Duration::from_millis(3500)).await;

        ticker.arm();
        let armed_at = Instant::now();
        assert!(ticks.recv().await.is_some());
        assert!(armed_at.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn recv_ends_when_ticker_dropped() {
        let (ticker, mut ticks) = IntervalTicker::new();
        drop(ticker);
        assert_eq!(ticks.recv().await, None);
    }
}
