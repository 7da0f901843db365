//! # Paperdesk
//!
//! Client-side state layer for a projects/papers workbench.
//!
//! The workbench browses research projects and the papers they track,
//! fetching both through the paperdesk REST API. State lives in one store
//! split into three slices: the project list, the open project, and the
//! open paper. Each slice is fed by a REST resource that brackets its
//! requests in loading actions, so drivers can render fetch progress by
//! watching the store alone.
//!
//! ## Example
//!
//! ```no_run
//! use paperdesk_app::Paperdesk;
//! use paperdesk_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Paperdesk::new(ApiClient::from_env());
//!
//!     app.project_list().get().await?;
//!
//!     let names = app
//!         .store()
//!         .state(|s| {
//!             s.project_list
//!                 .items
//!                 .iter()
//!                 .map(|p| p.name.clone())
//!                 .collect::<Vec<_>>()
//!         })
//!         .await;
//!     println!("{names:?}");
//!     Ok(())
//! }
//! ```

pub mod state;
pub mod types;

use paperdesk_client::ApiClient;
use paperdesk_store::{Collection, Model, Store};
use state::{AppAction, AppReducer, AppState, PAPER_MODEL, PROJECT_LIST, PROJECT_MODEL};
use types::{Paper, Project};

/// API sub-path for project resources.
const PROJECT_MIDPOINT: &str = "project";

/// API sub-path for paper resources.
const PAPER_MIDPOINT: &str = "paper";

/// Wired application: the store plus the REST resources feeding it.
///
/// Construction registers the three slice reducers with the store and binds
/// each resource to its component tag and API midpoint.
pub struct Paperdesk {
    store: Store<AppReducer>,
    project_list: Collection<Project>,
    project: Model<Project>,
    paper: Model<Paper>,
}

impl Paperdesk {
    /// Wire a store and its resources around `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        let store = Store::new(AppState::default(), AppReducer::new());

        let project_list = Collection::new(
            PROJECT_LIST,
            PROJECT_MIDPOINT,
            client.clone(),
            store.dispatcher(AppAction::ProjectList),
        );
        let project = Model::new(
            PROJECT_MODEL,
            PROJECT_MIDPOINT,
            client.clone(),
            store.dispatcher(AppAction::ProjectModel),
        );
        let paper = Model::new(
            PAPER_MODEL,
            PAPER_MIDPOINT,
            client,
            store.dispatcher(AppAction::PaperModel),
        );

        Self {
            store,
            project_list,
            project,
            paper,
        }
    }

    /// The store backing every slice.
    #[must_use]
    pub const fn store(&self) -> &Store<AppReducer> {
        &self.store
    }

    /// All-projects resource, feeding the `PROJECT_LIST` slice.
    #[must_use]
    pub const fn project_list(&self) -> &Collection<Project> {
        &self.project_list
    }

    /// Single-project resource, feeding the `PROJECT_MODEL` slice.
    #[must_use]
    pub const fn project(&self) -> &Model<Project> {
        &self.project
    }

    /// Single-paper resource, feeding the `PAPER_MODEL` slice.
    #[must_use]
    pub const fn paper(&self) -> &Model<Paper> {
        &self.paper
    }
}
