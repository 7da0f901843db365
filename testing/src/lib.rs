//! # Paperdesk Testing
//!
//! Testing utilities and helpers for the paperdesk state layer.
//!
//! This crate provides:
//! - [`ActionRecorder`]: captures the sequence of actions a resource
//!   dispatches, optionally forwarding them to a real store
//! - [`ReducerTest`]: fluent Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```
//! use paperdesk_core::{Action, CollectionReducer, Component, ListPayload, ListState};
//! use paperdesk_testing::ReducerTest;
//!
//! const INBOX: Component = Component::new("INBOX");
//!
//! ReducerTest::new(CollectionReducer::<i32>::new(INBOX))
//!     .given_state(ListState::default())
//!     .when_action(Action::new(INBOX, ListPayload::Loading(true)))
//!     .then_state(|state| {
//!         assert!(state.loading);
//!     })
//!     .run();
//! ```

pub mod recorder;
pub mod reducer_test;

// Re-export commonly used items
pub use recorder::ActionRecorder;
pub use reducer_test::ReducerTest;
