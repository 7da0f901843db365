//! # Paperdesk Store
//!
//! Store runtime and REST-backed resources for the paperdesk state layer.
//!
//! The [`Store`] holds the application state behind an async lock and applies
//! actions through a pure reducer, one at a time. [`Collection`] and
//! [`Model`] wrap list and single-entity REST resources: each operation
//! brackets its HTTP call in `Loading(true)` / `Loading(false)` dispatches
//! and publishes fetched data with an `Update`. Overlapping requests on one
//! resource are coordinated by [`RequestGeneration`] tickets, so a stale
//! response can neither overwrite newer state nor strand the loading flag.
//!
//! ## Example
//!
//! ```no_run
//! use paperdesk_client::ApiClient;
//! use paperdesk_core::{CollectionReducer, Component, ListState};
//! use paperdesk_store::{Collection, Store};
//!
//! const INBOX: Component = Component::new("INBOX");
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::new(
//!         ListState::<String>::default(),
//!         CollectionReducer::new(INBOX),
//!     );
//!
//!     let inbox = Collection::new(
//!         INBOX,
//!         "inbox",
//!         ApiClient::from_env(),
//!         store.dispatcher(|action| action),
//!     );
//!
//!     inbox.get().await?;
//!     let count = store.state(|s| s.items.len()).await;
//!     println!("{count} items");
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod generation;
pub mod model;
pub mod store;

// Re-export main types for convenience
pub use collection::Collection;
pub use generation::RequestGeneration;
pub use model::Model;
pub use store::Store;
