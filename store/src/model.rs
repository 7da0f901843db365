//! Single-entity REST resource with loading-state tracking

use crate::generation::RequestGeneration;
use paperdesk_client::{ApiClient, ApiError};
use paperdesk_core::{Action, Component, Dispatcher, ModelPayload};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Body of a delete endpoint response. The server reports application-level
/// failures inside a 200 body, historically under a capitalized key.
#[derive(Debug, serde::Deserialize)]
struct RemoveResponse {
    #[serde(default, alias = "Error")]
    error: Option<String>,
}

/// REST-backed single-entity resource.
///
/// Wraps one API midpoint (`project`, `paper`, ...) and publishes results to
/// the store slice tagged with its component. Every operation brackets its
/// work in `Loading(true)` / `Loading(false)` dispatches; the trailing flag
/// is guaranteed on success and on failure. When operations overlap, the
/// last-started one owns the final writes: a stale response is dropped
/// without dispatching, and its `Loading(false)` is left to the current
/// operation.
///
/// Outcomes are explicit: every operation returns a `Result` instead of
/// encoding failure in its value.
#[derive(Debug, Clone)]
pub struct Model<T> {
    component: Component,
    midpoint: &'static str,
    client: ApiClient,
    dispatch: Dispatcher<ModelPayload<T>>,
    generation: RequestGeneration,
}

impl<T> Model<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Create a resource for `midpoint`, dispatching under `component`.
    #[must_use]
    pub fn new(
        component: Component,
        midpoint: &'static str,
        client: ApiClient,
        dispatch: Dispatcher<ModelPayload<T>>,
    ) -> Self {
        Self {
            component,
            midpoint,
            client,
            dispatch,
            generation: RequestGeneration::new(),
        }
    }

    /// The tag this resource dispatches under.
    #[must_use]
    pub const fn component(&self) -> Component {
        self.component
    }

    /// The API sub-path this resource is bound to.
    #[must_use]
    pub const fn midpoint(&self) -> &'static str {
        self.midpoint
    }

    /// Fetch one entity by id and publish it to the store.
    ///
    /// Dispatches `Update(entity)` on success. The fetched entity is also
    /// returned so callers can sequence on it directly.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decoding errors. The loading flag is
    /// still finalized by whichever request is current.
    #[tracing::instrument(skip(self), fields(component = %self.component, midpoint = self.midpoint))]
    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        let ticket = self.generation.begin();
        self.set_loading(true).await;

        let result: Result<T, ApiError> = self
            .client
            .get_with(&self.endpoint("get"), &[("id", id)])
            .await;

        if self.generation.is_current(ticket) {
            if let Ok(entity) = &result {
                self.publish(ModelPayload::Update(entity.clone())).await;
            }
            self.set_loading(false).await;
        }

        result
    }

    /// Create a new entity from `data` and return the created entity.
    ///
    /// No `Update` is dispatched: how the new entity enters state is the
    /// caller's decision (typically by refreshing a collection).
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decoding errors; failures are also
    /// logged.
    #[tracing::instrument(skip(self, data), fields(component = %self.component, midpoint = self.midpoint))]
    pub async fn create(&self, data: &T) -> Result<T, ApiError> {
        let ticket = self.generation.begin();
        self.set_loading(true).await;

        let result = self.client.post(&self.endpoint("create"), data).await;

        if let Err(error) = &result {
            tracing::error!(error = %error, "create failed");
        }
        if self.generation.is_current(ticket) {
            self.set_loading(false).await;
        }

        result
    }

    /// Edit an existing entity. Returns the server's boolean verdict.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decoding errors; failures are also
    /// logged.
    #[tracing::instrument(skip(self, data), fields(component = %self.component, midpoint = self.midpoint))]
    pub async fn edit(&self, data: &T) -> Result<bool, ApiError> {
        let ticket = self.generation.begin();
        self.set_loading(true).await;

        let result = self.client.post(&self.endpoint("edit"), data).await;

        if let Err(error) = &result {
            tracing::error!(error = %error, "edit failed");
        }
        if self.generation.is_current(ticket) {
            self.set_loading(false).await;
        }

        result
    }

    /// Delete an entity.
    ///
    /// Beyond the loading bracket nothing is dispatched; the caller decides
    /// how the removal is reflected in state.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decoding errors, and
    /// [`ApiError::Rejected`] when the server reports an application-level
    /// failure inside a success body.
    #[tracing::instrument(skip(self, data), fields(component = %self.component, midpoint = self.midpoint))]
    pub async fn remove(&self, data: &T) -> Result<(), ApiError> {
        let ticket = self.generation.begin();
        self.set_loading(true).await;

        let result = self.remove_inner(data).await;

        if self.generation.is_current(ticket) {
            self.set_loading(false).await;
        }

        result
    }

    async fn remove_inner(&self, data: &T) -> Result<(), ApiError> {
        let response: RemoveResponse = self.client.post(&self.endpoint("delete"), data).await?;

        if let Some(reason) = response.error {
            tracing::warn!(reason = %reason, "delete rejected");
            return Err(ApiError::Rejected(reason));
        }
        Ok(())
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/{operation}", self.midpoint)
    }

    async fn set_loading(&self, loading: bool) {
        self.publish(ModelPayload::Loading(loading)).await;
    }

    async fn publish(&self, payload: ModelPayload<T>) {
        tracing::debug!(component = %self.component, action = payload.label(), "dispatch");
        self.dispatch
            .dispatch(Action::new(self.component, payload))
            .await;
    }
}
