//! Backend liveness probing

use std::time::Duration;

/// Pick the first candidate backend that answers its liveness check
///
/// Each candidate's `/health` endpoint is probed exactly once, bounded by
/// `probe_timeout`; a slow probe is aborted, not retried. When no candidate
/// answers, the first candidate is returned anyway so callers degrade to an
/// optimistic default instead of failing.
///
/// There is no shared cache: concurrent callers probe independently and may
/// pick different candidates if backend availability changes between calls.
pub async fn resolve_backend(
    client: &reqwest::Client,
    candidates: &[String],
    probe_timeout: Duration,
) -> String {
    for candidate in candidates {
        let probe = client.get(format!("{candidate}/health")).send();
        match tokio::time::timeout(probe_timeout, probe).await {
            Ok(Ok(response)) if response.status().is_success() => {
                debug!(backend = %candidate, "backend candidate is live");
                return candidate.clone();
            }
            Ok(Ok(response)) => {
                warn!(backend = %candidate, status = %response.status(), "backend candidate answered unhealthy");
            }
            Ok(Err(err)) => {
                warn!(backend = %candidate, error = %err, "backend candidate unreachable");
            }
            Err(_) => {
                warn!(backend = %candidate, timeout_ms = probe_timeout.as_millis() as u64, "backend probe timed out");
            }
        }
    }

    let fallback = candidates.first().cloned().unwrap_or_default();
    warn!(backend = %fallback, "no backend candidate answered; falling back to first");
    fallback
}
