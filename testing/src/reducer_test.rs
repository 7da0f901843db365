//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use paperdesk_core::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Actions are applied in the order given; `when_action` may be called
/// several times to test a dispatch sequence.
///
/// # Example
///
/// ```
/// use paperdesk_core::{Action, Component, ModelPayload, ModelReducer, ModelState};
/// use paperdesk_testing::ReducerTest;
///
/// const TAG: Component = Component::new("TAG");
///
/// ReducerTest::new(ModelReducer::<i32>::new(TAG))
///     .given_state(ModelState::default())
///     .when_action(Action::new(TAG, ModelPayload::Loading(true)))
///     .when_action(Action::new(TAG, ModelPayload::Update(7)))
///     .then_state(|state| {
///         assert!(state.loading);
///         assert_eq!(state.model, Some(7));
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Queue an action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test: apply the queued actions, then execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the initial state is not set, or if any assertion fails.
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        // Execute reducer over the queued actions
        for action in self.actions {
            self.reducer.reduce(&mut state, action);
        }

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperdesk_core::{Action, CollectionReducer, Component, ListPayload, ListState};

    const TAG: Component = Component::new("TAG");
    const OTHER: Component = Component::new("OTHER");

    #[test]
    fn test_applies_actions_in_order() {
        ReducerTest::new(CollectionReducer::<i32>::new(TAG))
            .given_state(ListState::default())
            .when_action(Action::new(TAG, ListPayload::Update(vec![1])))
            .when_action(Action::new(TAG, ListPayload::Update(vec![2, 3])))
            .then_state(|state| {
                assert_eq!(state.items, vec![2, 3]); // Last update wins
            })
            .run();
    }

    #[test]
    fn test_foreign_actions_are_ignored() {
        ReducerTest::new(CollectionReducer::<i32>::new(TAG))
            .given_state(ListState {
                loading: false,
                items: vec![1],
            })
            .when_action(Action::new(OTHER, ListPayload::Update(vec![9])))
            .then_state(|state| {
                assert_eq!(state.items, vec![1]);
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Initial state must be set")]
    fn test_run_requires_given_state() {
        ReducerTest::new(CollectionReducer::<i32>::new(TAG)).run();
    }
}
