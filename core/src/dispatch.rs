//! Dispatcher: the typed handle resources use to reach a store
//!
//! Resources never hold a store directly; they hold a [`Dispatcher`] built
//! by the store (or by a test harness). Awaiting [`Dispatcher::dispatch`]
//! completes only after the receiving end has applied the action, so a
//! dispatch followed by a state read observes the transition.

use crate::action::Action;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

type DispatchFn<P> = dyn Fn(Action<P>) -> BoxFuture<'static, ()> + Send + Sync;

/// Cloneable handle that delivers actions to a store.
pub struct Dispatcher<P> {
    inner: Arc<DispatchFn<P>>,
}

impl<P> Dispatcher<P> {
    /// Wrap a delivery function. The returned future must resolve once the
    /// action has been applied.
    #[must_use]
    pub fn new<F>(deliver: F) -> Self
    where
        F: Fn(Action<P>) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(deliver),
        }
    }

    /// Dispatcher that drops every action, for wiring-free tests.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| async {}.boxed())
    }

    /// Deliver an action; resolves once it has been applied.
    pub async fn dispatch(&self, action: Action<P>) {
        (self.inner)(action).await;
    }
}

impl<P> Clone for Dispatcher<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> fmt::Debug for Dispatcher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
