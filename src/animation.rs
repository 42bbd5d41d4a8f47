//! Fixed-rate tick source for the "play" animation.
//!
//! The ticker thread never touches a circle. It only posts [`Tick`]s into a
//! one-slot channel; the thread owning the circles receives them and calls
//! `randomize` itself. If that thread falls behind, the slot stays full and
//! further ticks are dropped instead of queueing up.

use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Sequence number counting every scheduled tick, delivered or dropped.
    pub seq: u64,
}

pub struct Ticker {
    ticks: Receiver<Tick>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<u64>>,
    interval: Duration,
}

impl Ticker {
    /// Shortest accepted interval; anything below is raised to it.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Start emitting ticks every `interval`, the first one immediately.
    pub fn start(interval: Duration) -> Self {
        let interval = interval.max(Self::MIN_INTERVAL);
        let (tx, rx) = mpsc::sync_channel(1);
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || run(tx, flag, interval));
        debug!("ticker started, interval {:?}", interval);
        Self {
            ticks: rx,
            stop,
            handle: Some(handle),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait up to `timeout` for the next tick.
    pub fn next_tick(&self, timeout: Duration) -> Option<Tick> {
        match self.ticks.recv_timeout(timeout) {
            Ok(tick) => Some(tick),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop the timer thread and return how many ticks it dropped.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.stop.store(true, Ordering::Relaxed);
        let dropped = self
            .handle
            .take()
            .and_then(|h| h.join().ok())
            .unwrap_or(0);
        debug!("ticker stopped, {dropped} ticks dropped");
        dropped
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.shutdown();
        }
    }
}

fn run(tx: SyncSender<Tick>, stop: Arc<AtomicBool>, interval: Duration) -> u64 {
    let mut deadline = Instant::now();
    let mut seq = 0u64;
    let mut dropped = 0u64;

    while !stop.load(Ordering::Relaxed) {
        match tx.try_send(Tick { seq }) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                dropped += 1;
                trace!("tick {seq} dropped, receiver busy");
            }
            Err(TrySendError::Disconnected(_)) => break,
        }
        seq += 1;

        // Sleep toward the absolute deadline so the rate does not drift.
        deadline += interval;
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }

    dropped
}
