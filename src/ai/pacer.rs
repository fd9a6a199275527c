//! Pacing between AI steps.
//!
//! The AI pauses before its first decision and between plays so a watching
//! human can follow along. The pause is behind `Pacer` so simulations and
//! tests run without waiting.

use std::time::Duration;

/// Suspends the AI loop between steps.
pub trait Pacer: Send {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_sleep_pacer_waits() {
        let start = Instant::now();
        SleepPacer.pause(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
