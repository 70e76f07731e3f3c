//! Bounded restart loop around the whole startup sequence.

use std::{future::Future, time::Duration};

use crate::{errors::Error, Result};

/// Total startup attempts before giving up.
pub const STARTUP_MAX_ATTEMPTS: u32 = 3;

/// Fixed wait between attempts.
pub const STARTUP_RETRY_DELAY: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: STARTUP_MAX_ATTEMPTS,
            delay: STARTUP_RETRY_DELAY,
        }
    }
}

/// Run `start` until it returns `Ok`, retrying transient failures.
///
/// There is no partial restart: each attempt re-runs the whole sequence from
/// secret-loading onward. Configuration errors are fatal on first sight and
/// consume no retry; anything else is retried after `policy.delay`, up to
/// `policy.max_attempts` runs total.
pub async fn supervise<F, Fut>(policy: RetryPolicy, mut start: F) -> Result<()>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut attempt = 1u32;
    loop {
        match start(attempt).await {
            Ok(()) => return Ok(()),
            Err(err @ Error::Config(_)) => {
                tracing::error!(error = %err, "fatal configuration error");
                return Err(err);
            }
            Err(err) if attempt < policy.max_attempts => {
                tracing::error!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    "startup failed, retrying after delay"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(attempt, error = %err, "startup retries exhausted");
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn succeeds_without_retrying() {
        let calls = AtomicU32::new(0);
        let res = supervise(fast_policy(), |_attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

        assert!(res.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let res = supervise(fast_policy(), |_attempt| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(Error::External(format!("transient failure {n}")))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert!(res.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let res = supervise(fast_policy(), |_attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::External("still down".to_string())) }
        })
        .await;

        assert!(matches!(res, Err(Error::External(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn config_errors_are_fatal_on_first_sight() {
        let calls = AtomicU32::new(0);
        let res = supervise(fast_policy(), |_attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::Config("TELEGRAM_BOT_TOKEN missing".to_string())) }
        })
        .await;

        assert!(matches!(res, Err(Error::Config(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
