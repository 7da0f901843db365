//! Reducer trait and the two slice reducers
//!
//! A reducer is a pure state transition: `(state, action) → state`, mutated
//! in place. The slice reducers here enforce the routing contract: an action
//! carrying a foreign component tag leaves the slice untouched, `Loading`
//! touches exactly the loading flag, and `Update` replaces exactly the data
//! field, wholesale.

use crate::action::{Component, ListAction, ListPayload, ModelAction, ModelPayload};
use crate::state::{ListState, ModelState};
use std::marker::PhantomData;

/// The Reducer trait - pure state transition for one slice of state
///
/// # Example
///
/// ```
/// use paperdesk_core::Reducer;
///
/// struct Toggle;
///
/// impl Reducer for Toggle {
///     type State = bool;
///     type Action = ();
///
///     fn reduce(&self, state: &mut Self::State, (): Self::Action) {
///         *state = !*state;
///     }
/// }
///
/// let mut state = false;
/// Toggle.reduce(&mut state, ());
/// assert!(state);
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// Apply an action to the state in place.
    ///
    /// Must be pure: no I/O, no dependence on anything but `state` and
    /// `action`.
    fn reduce(&self, state: &mut Self::State, action: Self::Action);
}

/// Reducer for a single-entity slice, keyed by component tag.
///
/// Actions tagged with any other component are ignored.
#[derive(Debug, Clone, Copy)]
pub struct ModelReducer<T> {
    component: Component,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ModelReducer<T> {
    /// Create a reducer reacting only to `component`.
    #[must_use]
    pub const fn new(component: Component) -> Self {
        Self {
            component,
            _marker: PhantomData,
        }
    }

    /// The tag this reducer reacts to.
    #[must_use]
    pub const fn component(&self) -> Component {
        self.component
    }
}

impl<T> Reducer for ModelReducer<T> {
    type State = ModelState<T>;
    type Action = ModelAction<T>;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        if action.component != self.component {
            return;
        }
        match action.payload {
            ModelPayload::Loading(loading) => state.loading = loading,
            ModelPayload::Update(model) => state.model = Some(model),
        }
    }
}

/// Reducer for a list slice, keyed by component tag.
///
/// Actions tagged with any other component are ignored. `Update` replaces
/// the items wholesale; there is no merge or append.
#[derive(Debug, Clone, Copy)]
pub struct CollectionReducer<T> {
    component: Component,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CollectionReducer<T> {
    /// Create a reducer reacting only to `component`.
    #[must_use]
    pub const fn new(component: Component) -> Self {
        Self {
            component,
            _marker: PhantomData,
        }
    }

    /// The tag this reducer reacts to.
    #[must_use]
    pub const fn component(&self) -> Component {
        self.component
    }
}

impl<T> Reducer for CollectionReducer<T> {
    type State = ListState<T>;
    type Action = ListAction<T>;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        if action.component != self.component {
            return;
        }
        match action.payload {
            ListPayload::Loading(loading) => state.loading = loading,
            ListPayload::Update(items) => state.items = items,
        }
    }
}
