//! # Paperdesk API Client
//!
//! HTTP transport for the paperdesk REST API.
//!
//! The server exposes resources under `http://<host>:4000/api/`, one
//! sub-path per resource kind (`project/list`, `paper/get`, ...). This
//! crate wraps that convention: GET with an optional URL-encoded query,
//! POST with a JSON body, strict 200-or-error decoding, and a streamed
//! download helper for dataset exports.
//!
//! ## Example
//!
//! ```no_run
//! use paperdesk_client::ApiClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Project {
//!     name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Host from PAPERDESK_API_HOST, defaulting to localhost
//!     let client = ApiClient::from_env();
//!
//!     let projects: Vec<Project> = client.get("project/list").await?;
//!     for project in &projects {
//!         println!("{}", project.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

// Re-export main types for convenience
pub use client::{ApiClient, DEFAULT_PORT, DOWNLOAD_FILE_NAME};
pub use error::ApiError;
