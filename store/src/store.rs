//! Store implementation: locked state, serialized transitions, change notification

use futures::FutureExt;
use paperdesk_core::{Action, Dispatcher, Reducer};
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// Centralized state container.
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (pure state transitions)
/// 3. Change notification (a watch channel carrying a revision counter)
///
/// Transitions are serialized by the write lock: two concurrent sends are
/// applied one after the other, never interleaved. Cloning a store is cheap
/// and yields a handle to the same state. Slices are created with the store
/// and live for its lifetime; there is no teardown.
///
/// # Example
///
/// ```
/// use paperdesk_core::{Action, CollectionReducer, Component, ListPayload, ListState};
/// use paperdesk_store::Store;
///
/// const INBOX: Component = Component::new("INBOX");
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = Store::new(ListState::<i32>::default(), CollectionReducer::new(INBOX));
///
/// store.send(Action::new(INBOX, ListPayload::Update(vec![1, 2]))).await;
///
/// let count = store.state(|s| s.items.len()).await;
/// assert_eq!(count, 2);
/// # }
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    state: Arc<RwLock<R::State>>,
    reducer: R,
    revision: watch::Sender<u64>,
}

impl<R> Store<R>
where
    R: Reducer + Send + Sync + 'static,
    R::State: Send + Sync + 'static,
    R::Action: Send + 'static,
{
    /// Create a new store with initial state and reducer.
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        let (revision, _) = watch::channel(0);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            revision,
        }
    }

    /// Apply an action under the write lock, then bump the revision.
    ///
    /// Resolves once the transition is visible to every subsequent
    /// [`state`](Self::state) call.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: R::Action) {
        {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action);
        }
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let count = store.state(|s| s.items.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to change notifications.
    ///
    /// The channel carries a revision counter that increases on every applied
    /// action; drivers re-read state when it changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Revision of the most recently applied action.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Build a dispatcher that lifts slice actions into this store's action
    /// type and sends them.
    ///
    /// `lift` is typically an enum variant constructor of the root action
    /// type. The dispatcher holds its own handle to the store.
    #[must_use]
    pub fn dispatcher<P, F>(&self, lift: F) -> Dispatcher<P>
    where
        R: Clone,
        P: Send + 'static,
        F: Fn(Action<P>) -> R::Action + Send + Sync + 'static,
    {
        let store = self.clone();

        Dispatcher::new(move |action| {
            let store = store.clone();
            let action = lift(action);
            async move { store.send(action).await }.boxed()
        })
    }
}

// Manual Clone: R::State does not need to be Clone, the handle shares it.
impl<R> Clone for Store<R>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            revision: self.revision.clone(),
        }
    }
}
