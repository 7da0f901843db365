//! Application state slices and the root reducer

use crate::types::{Paper, Project};
use paperdesk_core::{
    CollectionReducer, Component, ListAction, ListState, ModelAction, ModelReducer, ModelState,
    Reducer,
};
use serde::{Deserialize, Serialize};

/// Tag routing actions to the all-projects slice.
pub const PROJECT_LIST: Component = Component::new("PROJECT_LIST");

/// Tag routing actions to the open-project slice.
pub const PROJECT_MODEL: Component = Component::new("PROJECT_MODEL");

/// Tag routing actions to the open-paper slice.
pub const PAPER_MODEL: Component = Component::new("PAPER_MODEL");

/// Global application state: one slice per component tag.
///
/// Slices are created once with the store and live for its lifetime.
/// Snapshots serialize with the slice names as `camelCase` keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All known projects.
    pub project_list: ListState<Project>,
    /// Project currently open in the workbench.
    pub project_model: ModelState<Project>,
    /// Paper currently open in the workbench.
    pub paper_model: ModelState<Paper>,
}

/// Sum of the slice action types.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Actions for the all-projects slice.
    ProjectList(ListAction<Project>),
    /// Actions for the open-project slice.
    ProjectModel(ModelAction<Project>),
    /// Actions for the open-paper slice.
    PaperModel(ModelAction<Paper>),
}

impl From<ListAction<Project>> for AppAction {
    fn from(action: ListAction<Project>) -> Self {
        Self::ProjectList(action)
    }
}

impl From<ModelAction<Project>> for AppAction {
    fn from(action: ModelAction<Project>) -> Self {
        Self::ProjectModel(action)
    }
}

impl From<ModelAction<Paper>> for AppAction {
    fn from(action: ModelAction<Paper>) -> Self {
        Self::PaperModel(action)
    }
}

/// Root reducer: routes each action to the reducer owning its slice.
///
/// Slice reducers stay independent and pure; an action mutates at most the
/// one slice whose component tag it carries.
#[derive(Debug, Clone)]
pub struct AppReducer {
    project_list: CollectionReducer<Project>,
    project_model: ModelReducer<Project>,
    paper_model: ModelReducer<Paper>,
}

impl AppReducer {
    /// Create the root reducer with the three slice reducers wired to their
    /// tags.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            project_list: CollectionReducer::new(PROJECT_LIST),
            project_model: ModelReducer::new(PROJECT_MODEL),
            paper_model: ModelReducer::new(PAPER_MODEL),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        match action {
            AppAction::ProjectList(action) => {
                self.project_list.reduce(&mut state.project_list, action);
            }
            AppAction::ProjectModel(action) => {
                self.project_model.reduce(&mut state.project_model, action);
            }
            AppAction::PaperModel(action) => {
                self.paper_model.reduce(&mut state.paper_model, action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperdesk_core::{Action, ListPayload, ModelPayload};

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            papers: vec![],
        }
    }

    #[test]
    fn test_initial_state_is_idle_and_empty() {
        let state = AppState::default();
        assert!(!state.project_list.loading);
        assert!(state.project_list.items.is_empty());
        assert!(state.project_model.model.is_none());
        assert!(state.paper_model.model.is_none());
    }

    #[test]
    fn test_actions_reach_only_their_slice() {
        let reducer = AppReducer::new();
        let mut state = AppState::default();

        reducer.reduce(
            &mut state,
            Action::new(PROJECT_LIST, ListPayload::Update(vec![project("p1")])).into(),
        );

        assert_eq!(state.project_list.items, vec![project("p1")]);
        assert_eq!(state.project_model, ModelState::default());
        assert_eq!(state.paper_model, ModelState::default());
    }

    #[test]
    fn test_mismatched_tag_inside_a_variant_is_a_no_op() {
        let reducer = AppReducer::new();
        let mut state = AppState::default();

        // Lifted into the project-model variant but tagged for the list:
        // the slice reducer's component filter rejects it.
        reducer.reduce(
            &mut state,
            AppAction::ProjectModel(Action::new(
                PROJECT_LIST,
                ModelPayload::Update(project("p1")),
            )),
        );

        assert_eq!(state, AppState::default());
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code: serializing plain values
    fn test_snapshots_use_camel_case_slice_keys() {
        let state = AppState::default();
        let json = serde_json::to_value(&state).unwrap();

        assert!(json.get("projectList").is_some());
        assert!(json.get("projectModel").is_some());
        assert!(json.get("paperModel").is_some());
    }
}
