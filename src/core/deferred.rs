use crate::utils::error::{Result, RosterError};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A single-shot pending value with split resolve/reject handles.
///
/// The consumer awaits the [`Deferred`]; the producer settles it exactly
/// once through the [`Resolver`]. Both rejection and a dropped resolver
/// surface as [`RosterError::RejectedError`], so awaiting is always total.
pub struct Deferred<T> {
    rx: oneshot::Receiver<std::result::Result<T, String>>,
}

pub struct Resolver<T> {
    tx: oneshot::Sender<std::result::Result<T, String>>,
}

impl<T> Deferred<T> {
    pub fn pair() -> (Resolver<T>, Deferred<T>) {
        let (tx, rx) = oneshot::channel();
        (Resolver { tx }, Deferred { rx })
    }
}

impl<T> Resolver<T> {
    /// Settles the deferred value successfully. Consumes the handle, so a
    /// value can only be settled once.
    pub fn resolve(self, value: T) {
        let _ = self.tx.send(Ok(value));
    }

    /// Settles the deferred value with a failure reason.
    pub fn reject(self, reason: impl Into<String>) {
        let _ = self.tx.send(Err(reason.into()));
    }
}

impl<T> Future for Deferred<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(reason))) => Poll::Ready(Err(RosterError::RejectedError { reason })),
            Poll::Ready(Err(_)) => Poll::Ready(Err(RosterError::RejectedError {
                reason: "resolver dropped without settling".to_string(),
            })),
        }
    }
}

/// Where a fetch currently stands. Exactly one of three shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Failed { message: String },
    Success { data: String },
}

impl FetchState {
    pub fn status_line(&self) -> String {
        match self {
            FetchState::Loading => "loading".to_string(),
            FetchState::Failed { message } => format!("failed: {}", message),
            FetchState::Success { data } => format!("success: {}", data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let (resolver, deferred) = Deferred::pair();
        resolver.resolve(20);

        let value = tokio_test::block_on(deferred).unwrap();
        assert_eq!(value, 20);
    }

    #[test]
    fn test_reject() {
        let (resolver, deferred) = Deferred::<i32>::pair();
        resolver.reject("request failed");

        let err = tokio_test::block_on(deferred).unwrap_err();
        assert!(matches!(
            err,
            RosterError::RejectedError { ref reason } if reason == "request failed"
        ));
    }

    #[test]
    fn test_dropped_resolver_is_rejection() {
        let (resolver, deferred) = Deferred::<i32>::pair();
        drop(resolver);

        assert!(tokio_test::block_on(deferred).is_err());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(FetchState::Loading.status_line(), "loading");
        assert_eq!(
            FetchState::Failed {
                message: "timed out".to_string()
            }
            .status_line(),
            "failed: timed out"
        );
        assert_eq!(
            FetchState::Success {
                data: "post title".to_string()
            }
            .status_line(),
            "success: post title"
        );
    }
}
