//! Completion handles for open/close requests.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

/// How an open/close request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The widget reached the requested state (or was already in it).
    Settled,
    /// A conflicting request replaced this one before it finished.
    Superseded,
}

/// Resolves when an open/close request settles.
///
/// Await it, or poll it with [`Settle::try_outcome`] between page ticks.
/// Dropping a `Settle` does not cancel the request.
#[derive(Debug)]
pub struct Settle {
    rx: Option<oneshot::Receiver<Outcome>>,
    outcome: Option<Outcome>,
}

/// Sending half kept by the widget until the request settles.
#[derive(Debug)]
pub(crate) struct Resolver(oneshot::Sender<Outcome>);

impl Resolver {
    pub fn resolve(self, outcome: Outcome) {
        // The caller may have dropped its handle; nothing to report then.
        let _ = self.0.send(outcome);
    }
}

impl Settle {
    /// A handle that is already resolved.
    pub fn ready(outcome: Outcome) -> Self {
        Self {
            rx: None,
            outcome: Some(outcome),
        }
    }

    pub(crate) fn pending() -> (Resolver, Self) {
        let (tx, rx) = oneshot::channel();
        (
            Resolver(tx),
            Self {
                rx: Some(rx),
                outcome: None,
            },
        )
    }

    /// The outcome if the request has settled.
    pub fn try_outcome(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.outcome {
            return Some(outcome);
        }
        let rx = self.rx.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(Some(outcome)) => outcome,
            Ok(None) => return None,
            // Resolver dropped without sending
            Err(oneshot::Canceled) => Outcome::Superseded,
        };
        self.rx = None;
        self.outcome = Some(outcome);
        Some(outcome)
    }

    pub fn is_settled(&mut self) -> bool {
        self.try_outcome().is_some()
    }
}

impl Future for Settle {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome> {
        let this = self.get_mut();
        if let Some(outcome) = this.outcome {
            return Poll::Ready(outcome);
        }
        let Some(rx) = this.rx.as_mut() else {
            return Poll::Ready(Outcome::Superseded);
        };
        let outcome = match Pin::new(rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => outcome,
            Poll::Ready(Err(oneshot::Canceled)) => Outcome::Superseded,
            Poll::Pending => return Poll::Pending,
        };
        this.rx = None;
        this.outcome = Some(outcome);
        Poll::Ready(outcome)
    }
}
