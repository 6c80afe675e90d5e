//! Debounce primitive
//!
//! A single timer owned by the caller. Every `push` replaces the pending value
//! and restarts the delay; `settled` resolves with the latest value only once
//! it has been left alone for the full delay. Intermediate values are dropped.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Sleep};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    timer: Option<Pin<Box<Sleep>>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the timer
    pub fn push(&mut self, value: T) {
        let deadline = Instant::now() + self.delay;
        self.pending = Some(value);
        match self.timer.as_mut() {
            Some(timer) => timer.as_mut().reset(deadline),
            None => self.timer = Some(Box::pin(time::sleep_until(deadline))),
        }
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the pending value to become stable
    ///
    /// Never resolves while nothing is pending. Cancel-safe: dropping the
    /// future before it resolves leaves the pending value in place.
    pub async fn settled(&mut self) -> T {
        if self.pending.is_none() {
            future::pending::<()>().await;
        }

        if let Some(timer) = self.timer.as_mut() {
            timer.as_mut().await;
        }

        match self.pending.take() {
            Some(value) => value,
            None => future::pending().await,
        }
    }
}
