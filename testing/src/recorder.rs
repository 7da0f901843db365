//! Captures dispatched action sequences for assertions

use futures::FutureExt;
use paperdesk_core::{Action, Dispatcher};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Records every action delivered through the dispatchers it hands out.
///
/// Hand a resource a [`dispatcher`](Self::dispatcher) to capture its
/// dispatches without any store, or a [`forwarding`](Self::forwarding)
/// dispatcher to capture them on their way into a real store. Actions are
/// recorded in dispatch order.
///
/// # Example
///
/// ```
/// use paperdesk_core::{Action, Component, ModelPayload};
/// use paperdesk_testing::ActionRecorder;
///
/// const TAG: Component = Component::new("TAG");
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let recorder = ActionRecorder::<ModelPayload<i32>>::new();
/// let dispatch = recorder.dispatcher();
///
/// dispatch.dispatch(Action::new(TAG, ModelPayload::Loading(true))).await;
///
/// assert_eq!(recorder.len(), 1);
/// assert_eq!(
///     recorder.actions()[0].payload,
///     ModelPayload::Loading(true),
/// );
/// # }
/// ```
pub struct ActionRecorder<P> {
    log: Arc<Mutex<Vec<Action<P>>>>,
}

impl<P> ActionRecorder<P>
where
    P: Send + 'static,
{
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Dispatcher that records actions without forwarding them anywhere.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<P> {
        let log = Arc::clone(&self.log);

        Dispatcher::new(move |action| {
            log.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(action);
            async {}.boxed()
        })
    }

    /// Dispatcher that records actions and forwards them to `inner`.
    #[must_use]
    pub fn forwarding(&self, inner: Dispatcher<P>) -> Dispatcher<P>
    where
        P: Clone,
    {
        let log = Arc::clone(&self.log);

        Dispatcher::new(move |action| {
            log.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(action.clone());
            let inner = inner.clone();
            async move { inner.dispatch(action).await }.boxed()
        })
    }

    /// Snapshot of the recorded actions, in dispatch order.
    #[must_use]
    pub fn actions(&self) -> Vec<Action<P>>
    where
        P: Clone,
    {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been dispatched yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> Default for ActionRecorder<P>
where
    P: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for ActionRecorder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRecorder")
            .field("len", &self.log.lock().unwrap_or_else(PoisonError::into_inner).len())
            .finish()
    }
}
