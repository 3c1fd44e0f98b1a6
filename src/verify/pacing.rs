// Fixed pause between raiders in a batch.
//
// The remote data API penalizes burst traffic, so the coordinator paces
// raiders with a fixed worst-case delay rather than anything adaptive —
// nothing here reads rate-limit headers. The pause is a full sleep of the
// configured delay, taken after a raider completes; time spent processing
// a raider never shortens it. The coordinator pauses after every raider
// except the last, so N raiders cost exactly N-1 pauses.
//
// This struct is the seam for swapping in an adaptive strategy later;
// the fixed delay is the compatible default.

use tokio::time::Duration;

/// Pauses for a fixed delay between batch items.
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Create a pacer with a fixed inter-item delay.
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// Sleep out the full configured delay.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_full_delay() {
        let pacer = Pacer::fixed(Duration::from_secs(60));
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_is_not_shortened_by_time_already_spent() {
        // Work done before the pause must not count against it.
        let pacer = Pacer::fixed(Duration::from_secs(60));
        tokio::time::sleep(Duration::from_secs(90)).await;
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_pauses_accumulate() {
        let pacer = Pacer::fixed(Duration::from_secs(10));
        let start = Instant::now();
        for _ in 0..3 {
            pacer.pause().await;
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(30));
        assert!(elapsed < Duration::from_secs(40));
    }

    #[tokio::test]
    async fn zero_delay_never_sleeps() {
        let pacer = Pacer::fixed(Duration::ZERO);
        let start = std::time::Instant::now();
        for _ in 0..20 {
            pacer.pause().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
