//! List REST resource with loading-state tracking

use crate::generation::RequestGeneration;
use paperdesk_client::{ApiClient, ApiError};
use paperdesk_core::{Action, Component, Dispatcher, ListPayload};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// REST-backed list resource.
///
/// Fetches `<midpoint>/list` and publishes the result to the store slice
/// tagged with its component. The fetched items replace the slice wholesale;
/// an empty response empties the slice. Like [`Model`](crate::Model), every
/// fetch brackets its work in `Loading(true)` / `Loading(false)` dispatches
/// and overlapping fetches are resolved in favor of the last-started one.
///
/// The read model stays state-driven: fetches return `Ok(())` and callers
/// observe the items through the store.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    component: Component,
    midpoint: &'static str,
    client: ApiClient,
    dispatch: Dispatcher<ListPayload<T>>,
    generation: RequestGeneration,
}

impl<T> Collection<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Create a resource for `midpoint`, dispatching under `component`.
    #[must_use]
    pub fn new(
        component: Component,
        midpoint: &'static str,
        client: ApiClient,
        dispatch: Dispatcher<ListPayload<T>>,
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

    /// Fetch the full entity list and publish it to the store.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decoding errors. The loading flag is
    /// still finalized by whichever request is current.
    #[tracing::instrument(skip(self), fields(component = %self.component, midpoint = self.midpoint))]
    pub async fn get(&self) -> Result<(), ApiError> {
        self.fetch(None::<&()>).await
    }

    /// Fetch the entity list filtered by `params` and publish it to the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decoding errors. The loading flag is
    /// still finalized by whichever request is current.
    #[tracing::instrument(skip(self, params), fields(component = %self.component, midpoint = self.midpoint))]
    pub async fn get_with<Q>(&self, params: &Q) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        self.fetch(Some(params)).await
    }

    async fn fetch<Q>(&self, params: Option<&Q>) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let ticket = self.generation.begin();
        self.set_loading(true).await;

        let endpoint = format!("{}/list", self.midpoint);
        let result: Result<Vec<T>, ApiError> = match params {
            Some(params) => self.client.get_with(&endpoint, params).await,
            None => self.client.get(&endpoint).await,
        };

        if self.generation.is_current(ticket) {
            if let Ok(items) = &result {
                self.publish(ListPayload::Update(items.clone())).await;
            }
            self.set_loading(false).await;
        }

        result.map(|_| ())
    }

    async fn set_loading(&self, loading: bool) {
        self.publish(ListPayload::Loading(loading)).await;
    }

    async fn publish(&self, payload: ListPayload<T>) {
        tracing::debug!(component = %self.component, action = payload.label(), "dispatch");
        self.dispatch
            .dispatch(Action::new(self.component, payload))
            .await;
    }
}
