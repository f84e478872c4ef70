//! One-second countdown driver.
//!
//! At most one tick task is alive at a time. Every tick carries the
//! generation that produced it, so a tick queued by a cancelled task is
//! recognised as stale and dropped.

use quiz_core::TimerCommand;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owner of the single live tick task.
pub struct Countdown {
    period: Duration,
    tx: UnboundedSender<u64>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Countdown {
    /// Create a stopped countdown and the receiver its ticks arrive on.
    pub fn channel(period: Duration) -> (Self, UnboundedReceiver<u64>) {
        let (tx, rx) = unbounded_channel();
        let countdown = Self {
            period,
            tx,
            handle: None,
            generation: 0,
        };
        (countdown, rx)
    }

    /// Cancel the current task, if any, and start a new one. First tick
    /// arrives one period from now.
    pub fn start(&mut self) {
        self.stop();

        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if tx.send(generation).is_err() {
                    break;
                }
            }
        }));

        tracing::trace!(generation, "countdown started");
    }

    /// Cancel the current task. Ticks already queued become stale.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Restart => self.start(),
            TimerCommand::Stop => self.stop(),
            TimerCommand::Keep => {}
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether a tick with `generation` comes from the live task.
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
