//! Auto-advance timer for the carousel.
//!
//! The timer is tied to the lifetime of [`CarouselTimer`]: dropping it aborts
//! the background task, so no tick can reach the event loop after teardown.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct CarouselTimer {
    period: Duration,
    handle: JoinHandle<()>,
}

impl CarouselTimer {
    /// Start emitting [`AppEvent::CarouselTick`] every `period`. The first
    /// tick arrives one full period after start.
    pub fn start(period: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if event_tx.send(AppEvent::CarouselTick).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "carousel timer started");
        Self { period, handle }
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(period_ms = self.period.as_millis() as u64, "carousel timer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_ticks(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
        let mut n = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, AppEvent::CarouselTick));
            n += 1;
        }
        n
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = CarouselTimer::start(Duration::from_secs(10), tx);

        tokio::time::advance(Duration::from_secs(9)).await;
        settle().await;
        assert_eq!(drain_ticks(&mut rx), 0);

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(drain_ticks(&mut rx), 1);

        for _ in 0..2 {
            tokio::time::advance(Duration::from_secs(10)).await;
            settle().await;
        }
        assert_eq!(drain_ticks(&mut rx), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_drop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CarouselTimer::start(Duration::from_secs(10), tx);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(drain_ticks(&mut rx), 1);

        drop(timer);
        settle().await;

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert_eq!(drain_ticks(&mut rx), 0);
        // the aborted task released its sender
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = CarouselTimer::start(Duration::from_secs(1), tx);
        drop(rx);

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert!(timer.handle.is_finished());
    }
}
