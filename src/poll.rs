// src/poll.rs
//! Bounded polling for async backend results: fixed interval, fixed attempt
//! budget, terminal timeout error. This mirrors how the dashboard waits for
//! an analysis to finish.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    // The dashboard polls every 2s, up to 30 times.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 30,
        }
    }
}

/// Probe at a fixed interval until `probe` yields a value or the attempt
/// budget runs out. The first probe happens after one interval, not
/// immediately. Probe errors propagate right away; `Ok(None)` means "still
/// pending, try again".
pub async fn poll_until<T, F, Fut>(cfg: PollConfig, mut probe: F) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    for attempt in 1..=cfg.max_attempts {
        tokio::time::sleep(cfg.interval).await;
        if let Some(value) = probe().await? {
            debug!(target: "poll", attempt, "poll completed");
            return Ok(value);
        }
    }
    Err(anyhow::anyhow!(
        "polling timed out after {} attempts",
        cfg.max_attempts
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_cfg(max_attempts: u32) -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(10),
            max_attempts,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_once_probe_reports_completion() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls2 = calls.clone();
        let out = poll_until(fast_cfg(30), move || {
            let calls = calls2.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(if n >= 3 { Some(n) } else { None })
            }
        })
        .await
        .expect("should resolve");
        assert_eq!(out, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_attempts_yield_timeout_error() {
        let err = poll_until(fast_cfg(5), || async { Ok::<Option<()>, _>(None) })
            .await
            .expect_err("should time out");
        assert!(err.to_string().contains("timed out after 5 attempts"));
    }

    #[tokio::test(start_paused = true)]
    async fn probe_errors_propagate_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls2 = calls.clone();
        let err = poll_until(fast_cfg(30), move || {
            let calls = calls2.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<Option<()>, _>(anyhow::anyhow!("backend unreachable"))
            }
        })
        .await
        .expect_err("should fail");
        assert!(err.to_string().contains("backend unreachable"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
