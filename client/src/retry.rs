//! Refresh-on-401 with a single retry

use std::future::Future;

use reqwest::StatusCode;

use crate::error::ClientError;

/// Anything that can tell whether the server rejected the credentials
pub trait AuthStatus {
    fn is_unauthorized(&self) -> bool;
}

impl AuthStatus for reqwest::Response {
    fn is_unauthorized(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }
}

impl AuthStatus for StatusCode {
    fn is_unauthorized(&self) -> bool {
        *self == StatusCode::UNAUTHORIZED
    }
}

/// Run `attempt`; on 401 run `refresh` once and, if it succeeded, `attempt`
/// once more.
///
/// The second outcome is returned as is, even if it is another 401. A failed
/// refresh yields [`ClientError::SessionExpired`].
pub async fn send_with_single_retry<T, A, AF, R, RF>(
    mut attempt: A,
    refresh: R,
) -> Result<T, ClientError>
where
    T: AuthStatus,
    A: FnMut() -> AF,
    AF: Future<Output = Result<T, ClientError>>,
    R: FnOnce() -> RF,
    RF: Future<Output = bool>,
{
    let first = attempt().await?;
    if !first.is_unauthorized() {
        return Ok(first);
    }

    tracing::debug!("Request rejected with 401, refreshing access token");
    if !refresh().await {
        return Err(ClientError::SessionExpired);
    }

    attempt().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers with `statuses` in order, counting the calls
    fn scripted<'a>(
        statuses: &'static [StatusCode],
        calls: &'a AtomicUsize,
    ) -> impl FnMut() -> std::future::Ready<Result<StatusCode, ClientError>> + 'a {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            std::future::ready(Ok(statuses[n.min(statuses.len() - 1)]))
        }
    }

    #[tokio::test]
    async fn test_success_needs_no_refresh() {
        let calls = AtomicUsize::new(0);
        let refreshes = AtomicUsize::new(0);

        let result = send_with_single_retry(scripted(&[StatusCode::OK], &calls), || async {
            refreshes.fetch_add(1, Ordering::SeqCst);
            true
        })
        .await
        .unwrap();

        assert_eq!(result, StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_then_retry_succeeds() {
        let calls = AtomicUsize::new(0);
        let refreshes = AtomicUsize::new(0);

        let result = send_with_single_retry(
            scripted(&[StatusCode::UNAUTHORIZED, StatusCode::OK], &calls),
            || async {
                refreshes.fetch_add(1, Ordering::SeqCst);
                true
            },
        )
        .await
        .unwrap();

        assert_eq!(result, StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_at_most_once() {
        let calls = AtomicUsize::new(0);

        let result = send_with_single_retry(
            scripted(&[StatusCode::UNAUTHORIZED], &calls),
            || async { true },
        )
        .await
        .unwrap();

        assert_eq!(result, StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_is_session_expired() {
        let calls = AtomicUsize::new(0);

        let result = send_with_single_retry(
            scripted(&[StatusCode::UNAUTHORIZED, StatusCode::OK], &calls),
            || async { false },
        )
        .await;

        assert!(matches!(result, Err(ClientError::SessionExpired)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_attempt_error_propagates_without_refresh() {
        let refreshes = AtomicUsize::new(0);

        let result: Result<StatusCode, _> = send_with_single_retry(
            || async { Err(ClientError::NoAccessToken) },
            || async {
                refreshes.fetch_add(1, Ordering::SeqCst);
                true
            },
        )
        .await;

        assert!(matches!(result, Err(ClientError::NoAccessToken)));
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    }
}
