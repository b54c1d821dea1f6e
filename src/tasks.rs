use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

const MAX_ATTEMPTS: u32 = 3;

/// Runs a best-effort write off the response path.
///
/// The caller never awaits the outcome: the write is retried with backoff a
/// bounded number of times, then logged and dropped. Counter increments and
/// session appends go through here so their failure cannot fail the request.
pub fn spawn_best_effort<F, Fut>(task: &'static str, op: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    tokio::spawn(async move {
        let mut delay = Duration::from_millis(200);
        for attempt in 1..=MAX_ATTEMPTS {
            match op().await {
                Ok(()) => return,
                Err(e) if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(task, attempt, error = %e, "background write failed, retrying");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!(task, error = %e, "background write dropped after retries");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = calls.clone();
        let handle = spawn_best_effort("test-write", move || {
            let calls = seen.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    anyhow::bail!("transient");
                }
                Ok(())
            }
        });
        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_bounded_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = calls.clone();
        let handle = spawn_best_effort("test-write", move || {
            let calls = seen.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                anyhow::bail!("permanent")
            }
        });
        // The task itself must terminate instead of retrying forever.
        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), MAX_ATTEMPTS);
    }
}
