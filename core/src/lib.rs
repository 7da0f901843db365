//! # Paperdesk Core
//!
//! Core types for the paperdesk state layer.
//!
//! This crate provides the primitives shared by the store runtime and the
//! REST-backed resources:
//!
//! - **Component**: static tag routing actions to the state slice they target
//! - **Action**: a component tag paired with a typed payload
//! - **Payloads**: the closed `Loading`/`Update` vocabulary for list and
//!   single-entity slices
//! - **State slices**: [`ListState`] and [`ModelState`]
//! - **Reducer**: pure state transition trait plus the two slice reducers
//! - **Dispatcher**: cloneable handle delivering actions to a store
//!
//! ## Example
//!
//! ```
//! use paperdesk_core::{
//!     Action, Component, ListPayload, CollectionReducer, ListState, Reducer,
//! };
//!
//! const INBOX: Component = Component::new("INBOX");
//!
//! let reducer = CollectionReducer::<String>::new(INBOX);
//! let mut state = ListState::default();
//!
//! reducer.reduce(&mut state, Action::new(INBOX, ListPayload::Loading(true)));
//! assert!(state.loading);
//!
//! reducer.reduce(
//!     &mut state,
//!     Action::new(INBOX, ListPayload::Update(vec!["hello".to_string()])),
//! );
//! assert_eq!(state.items, vec!["hello".to_string()]);
//! assert!(state.loading);
//! ```

pub mod action;
pub mod dispatch;
pub mod reducer;
pub mod state;

// Re-export main types for convenience
pub use action::{Action, Component, ListAction, ListPayload, ModelAction, ModelPayload};
pub use dispatch::Dispatcher;
pub use reducer::{CollectionReducer, ModelReducer, Reducer};
pub use state::{ListState, ModelState};
