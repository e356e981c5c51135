use std::future::Future;
use std::time::Duration;

/// How long a snap waits for the transition-end event before finishing anyway
pub const SNAP_FALLBACK: Duration = Duration::from_millis(1000);

/// What ended a snap transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSignal {
    TransitionEnd,
    Fallback,
}

/// Race the transition-end notification against the fallback timer.
///
/// Whichever resolves first wins; the other future is dropped, which also
/// cancels the timer.
pub async fn wait_for_snap<F>(transition_end: F, fallback: Duration) -> SnapSignal
where
    F: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = transition_end => SnapSignal::TransitionEnd,
        _ = tokio::time::sleep(fallback) => SnapSignal::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::TransitionEndSignal;

    #[tokio::test(start_paused = true)]
    async fn test_transition_end_wins() {
        let (mut signal, end) = TransitionEndSignal::channel();
        signal.fire("transitionend");

        let started = tokio::time::Instant::now();
        assert_eq!(wait_for_snap(end.wait(), SNAP_FALLBACK).await, SnapSignal::TransitionEnd);
        assert!(started.elapsed() < SNAP_FALLBACK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_after_one_second() {
        let started = tokio::time::Instant::now();
        let signal = wait_for_snap(std::future::pending(), SNAP_FALLBACK).await;

        assert_eq!(signal, SnapSignal::Fallback);
        assert!(started.elapsed() >= SNAP_FALLBACK);
        assert!(started.elapsed() < SNAP_FALLBACK + Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_transition_end_loses() {
        let end = async {
            tokio::time::sleep(Duration::from_millis(1500)).await;
        };
        assert_eq!(wait_for_snap(end, SNAP_FALLBACK).await, SnapSignal::Fallback);
    }
}
