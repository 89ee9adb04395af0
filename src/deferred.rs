//! Results settled from outside the computation that awaits them.
//!
//! [`deferred`] returns a pair: a [`Completer`] that settles the result and a
//! [`Deferred`] future that yields it. The two halves are plain values and
//! can be moved to different tasks or threads.
//!
//! ```text
//!   Completer ──resolve / reject──► Deferred.await ─► Ok(T) / Err(Rejected(E))
//!       │
//!       └── dropped unsettled ────► Deferred.await ─► Err(Abandoned)
//! ```
//!
//! Settling consumes the completer, so a result cannot be settled twice.
//! A deferred that already holds its outcome can be created with
//! [`Deferred::resolved`] and [`Deferred::rejected`]; it has no completer
//! at all.
//!
//! # Examples
//!
//! ```rust
//! use sortkit::deferred::{deferred, DeferredError};
//!
//! # futures::executor::block_on(async {
//! let (completer, result) = deferred::<u32, String>();
//!
//! std::thread::spawn(move || {
//!     completer.resolve(42).ok();
//! });
//!
//! assert_eq!(result.await, Ok(42));
//!
//! let (completer, result) = deferred::<u32, String>();
//! drop(completer);
//! assert_eq!(result.await, Err(DeferredError::Abandoned));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::FusedFuture;

/// Creates a linked [`Completer`] and [`Deferred`].
///
/// # Examples
///
/// ```rust
/// use sortkit::deferred::{deferred, DeferredError};
///
/// # futures::executor::block_on(async {
/// let (completer, result) = deferred::<(), &str>();
/// completer.reject("boom").ok();
/// assert_eq!(result.await, Err(DeferredError::Rejected("boom")));
/// # });
/// ```
#[must_use]
pub fn deferred<T, E>() -> (Completer<T, E>, Deferred<T, E>) {
    let (sender, receiver) = oneshot::channel();
    (
        Completer {
            sender: Some(sender),
        },
        Deferred {
            state: DeferredState::Pending(receiver),
        },
    )
}

// =============================================================================
// Completer
// =============================================================================

/// The producing half of a deferred result.
///
/// Dropping a completer without settling it makes the linked [`Deferred`]
/// yield [`DeferredError::Abandoned`].
pub struct Completer<T, E> {
    /// `None` only once the completer has been settled or dropped.
    sender: Option<oneshot::Sender<Result<T, E>>>,
}

impl<T, E> Completer<T, E> {
    /// Settles the result with a value.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError`] holding the value if the [`Deferred`] was
    /// dropped.
    pub fn resolve(self, value: T) -> Result<(), SettleError<T, E>> {
        self.settle(Ok(value))
    }

    /// Settles the result with an error.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError`] holding the error if the [`Deferred`] was
    /// dropped.
    pub fn reject(self, error: E) -> Result<(), SettleError<T, E>> {
        self.settle(Err(error))
    }

    /// Settles the result with an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError`] holding the outcome if the [`Deferred`] was
    /// dropped.
    pub fn settle(mut self, outcome: Result<T, E>) -> Result<(), SettleError<T, E>> {
        let Some(sender) = self.sender.take() else {
            return Err(SettleError { outcome });
        };
        sender.send(outcome).map_err(|outcome| {
            #[cfg(feature = "tracing")]
            tracing::debug!("deferred result settled after its receiver was dropped");
            SettleError { outcome }
        })
    }

    /// Returns `true` while the linked [`Deferred`] still exists.
    #[must_use]
    pub fn is_observed(&self) -> bool {
        self.sender
            .as_ref()
            .is_some_and(|sender| !sender.is_canceled())
    }
}

#[cfg(feature = "tracing")]
impl<T, E> Drop for Completer<T, E> {
    fn drop(&mut self) {
        if self.sender.take().is_some() {
            tracing::debug!("completer dropped without settling its deferred result");
        }
    }
}

impl<T, E> fmt::Debug for Completer<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Completer")
            .field("observed", &self.is_observed())
            .finish()
    }
}

// =============================================================================
// Deferred
// =============================================================================

enum DeferredState<T, E> {
    Pending(oneshot::Receiver<Result<T, E>>),
    Settled(Result<T, E>),
    Consumed,
}

/// The consuming half of a deferred result: a future yielding the outcome
/// given to the linked [`Completer`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Deferred<T, E> {
    state: DeferredState<T, E>,
}

// The state is never pinned structurally.
impl<T, E> Unpin for Deferred<T, E> {}

impl<T, E> Deferred<T, E> {
    /// Creates a deferred result that is already resolved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::deferred::Deferred;
    ///
    /// # futures::executor::block_on(async {
    /// let result: Deferred<&str, ()> = Deferred::resolved("done");
    /// assert_eq!(result.await, Ok("done"));
    /// # });
    /// ```
    pub const fn resolved(value: T) -> Self {
        Self {
            state: DeferredState::Settled(Ok(value)),
        }
    }

    /// Creates a deferred result that is already rejected.
    pub const fn rejected(error: E) -> Self {
        Self {
            state: DeferredState::Settled(Err(error)),
        }
    }

    /// Takes the outcome without waiting.
    ///
    /// Returns `Ok(None)` while the result is still pending.
    ///
    /// # Errors
    ///
    /// Returns the same errors the future would yield.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortkit::deferred::deferred;
    ///
    /// let (completer, mut result) = deferred::<u8, ()>();
    /// assert_eq!(result.try_take(), Ok(None));
    ///
    /// completer.resolve(7).ok();
    /// assert_eq!(result.try_take(), Ok(Some(7)));
    /// ```
    pub fn try_take(&mut self) -> Result<Option<T>, DeferredError<E>> {
        match std::mem::replace(&mut self.state, DeferredState::Consumed) {
            DeferredState::Pending(mut receiver) => match receiver.try_recv() {
                Ok(None) => {
                    self.state = DeferredState::Pending(receiver);
                    Ok(None)
                }
                Ok(Some(outcome)) => outcome.map(Some).map_err(DeferredError::Rejected),
                Err(oneshot::Canceled) => Err(DeferredError::Abandoned),
            },
            DeferredState::Settled(outcome) => outcome.map(Some).map_err(DeferredError::Rejected),
            DeferredState::Consumed => Err(DeferredError::Consumed),
        }
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, DeferredError<E>>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match std::mem::replace(&mut this.state, DeferredState::Consumed) {
            DeferredState::Pending(mut receiver) => match Pin::new(&mut receiver).poll(context) {
                Poll::Pending => {
                    this.state = DeferredState::Pending(receiver);
                    Poll::Pending
                }
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome.map_err(DeferredError::Rejected)),
                Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(DeferredError::Abandoned)),
            },
            DeferredState::Settled(outcome) => {
                Poll::Ready(outcome.map_err(DeferredError::Rejected))
            }
            DeferredState::Consumed => Poll::Ready(Err(DeferredError::Consumed)),
        }
    }
}

impl<T, E> FusedFuture for Deferred<T, E> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, DeferredState::Consumed)
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            DeferredState::Pending(_) => "Pending",
            DeferredState::Settled(_) => "Settled",
            DeferredState::Consumed => "Consumed",
        };
        formatter
            .debug_struct("Deferred")
            .field("state", &state)
            .finish()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Reasons a [`Deferred`] yields no value.
///
/// # Examples
///
/// ```rust
/// use sortkit::deferred::DeferredError;
///
/// let error: DeferredError<String> = DeferredError::Abandoned;
/// assert_eq!(
///     format!("{error}"),
///     "completer dropped without settling the deferred result"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredError<E> {
    /// The completer rejected the result with this error.
    Rejected(E),
    /// The completer was dropped without settling the result.
    Abandoned,
    /// The outcome was already taken from this deferred.
    Consumed,
}

impl<E: fmt::Display> fmt::Display for DeferredError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(error) => write!(formatter, "deferred result rejected: {error}"),
            Self::Abandoned => write!(
                formatter,
                "completer dropped without settling the deferred result"
            ),
            Self::Consumed => write!(formatter, "deferred result already taken"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for DeferredError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Abandoned | Self::Consumed => None,
        }
    }
}

/// Returned when settling a result whose [`Deferred`] was dropped.
///
/// Holds the outcome that could not be delivered.
pub struct SettleError<T, E> {
    outcome: Result<T, E>,
}

impl<T, E> SettleError<T, E> {
    /// Returns the outcome that could not be delivered.
    pub fn into_outcome(self) -> Result<T, E> {
        self.outcome
    }
}

impl<T, E> fmt::Debug for SettleError<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SettleError")
            .field("resolved", &self.outcome.is_ok())
            .finish_non_exhaustive()
    }
}

impl<T, E> fmt::Display for SettleError<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "deferred result dropped before it was settled")
    }
}

impl<T, E> std::error::Error for SettleError<T, E> {}
