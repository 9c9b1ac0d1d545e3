//! Fixed-interval warm-up progress counter

use super::PROGRESS_COMPLETE;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Progress added on every tick
pub const DEFAULT_STEP: u8 = 2;

/// Interval between ticks
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(20);

/// Drives a counter from 0 to 100 on a tokio interval
#[derive(Debug, Clone, Copy)]
pub struct ProgressSimulator {
    step: u8,
    interval: Duration,
}

impl ProgressSimulator {
    /// A zero step or interval is bumped to the smallest value that still advances
    pub fn new(step: u8, interval: Duration) -> Self {
        Self {
            step: step.max(1),
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks needed to reach completion
    pub fn ticks(&self) -> u32 {
        u32::from(PROGRESS_COMPLETE).div_ceil(u32::from(self.step))
    }

    /// Start the counter on the current tokio runtime
    pub fn spawn(self) -> ProgressHandle {
        let (tx, rx) = watch::channel(0u8);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick fires immediately
            ticker.tick().await;

            let mut progress = 0u8;
            while progress < PROGRESS_COMPLETE {
                ticker.tick().await;
                progress = progress.saturating_add(self.step).min(PROGRESS_COMPLETE);
                if tx.send(progress).is_err() {
                    tracing::debug!("Progress receivers dropped, stopping simulation");
                    break;
                }
            }
        });

        ProgressHandle { rx, task }
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, DEFAULT_INTERVAL)
    }
}

/// Owner of a running simulation. Dropping it cancels the timer.
#[derive(Debug)]
pub struct ProgressHandle {
    rx: watch::Receiver<u8>,
    task: JoinHandle<()>,
}

impl ProgressHandle {
    /// Latest published progress
    pub fn current(&self) -> u8 {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.rx.clone()
    }

    /// Wait for the next progress value. Returns `None` once the simulation has
    /// stopped publishing.
    pub async fn next(&mut self) -> Option<u8> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the simulation before it completes
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        assert_eq!(ProgressSimulator::default().ticks(), 50);
        assert_eq!(ProgressSimulator::new(3, DEFAULT_INTERVAL).ticks(), 34);
        assert_eq!(ProgressSimulator::new(0, DEFAULT_INTERVAL).step(), 1);
    }

    #[tokio::test]
    async fn test_runs_to_completion() {
        let mut handle = ProgressSimulator::new(25, Duration::from_millis(1)).spawn();
        let mut seen = Vec::new();
        while let Some(progress) = handle.next().await {
            seen.push(progress);
        }
        // watch keeps only the latest value, so intermediate readings may be skipped
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(handle.current(), 100);
    }

    #[tokio::test]
    async fn test_cancel_stops_publishing() {
        let handle = ProgressSimulator::new(1, Duration::from_secs(60)).spawn();
        let mut rx = handle.subscribe();
        handle.cancel();
        // Sender is dropped with the aborted task
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), 0);
    }
}
