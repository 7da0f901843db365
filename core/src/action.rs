//! Action primitives: component tags and typed payloads
//!
//! An [`Action`] is the only input a store accepts: a [`Component`] tag
//! naming the state slice it targets, paired with a typed payload. The
//! payload enums close the action vocabulary to `Loading` and `Update`,
//! so a loading flag can never carry entity data and vice versa.

use std::fmt;

/// Routing key identifying which state slice an action targets.
///
/// A reducer only reacts to actions carrying its own tag; everything else
/// passes through untouched. Tags are static strings so they can live in
/// `const` declarations next to the slices they name.
///
/// # Example
///
/// ```
/// use paperdesk_core::Component;
///
/// const PROJECT_LIST: Component = Component::new("PROJECT_LIST");
/// assert_eq!(PROJECT_LIST.name(), "PROJECT_LIST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component(&'static str);

impl Component {
    /// Create a component tag from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The tag's name, as used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A dispatched message: a routing tag plus a typed payload.
///
/// Construction is unchecked. Any caller may build any action; whether it
/// has an effect is decided solely by the reducer owning the tagged slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<P> {
    /// Slice this action targets.
    pub component: Component,
    /// What the action carries.
    pub payload: P,
}

impl<P> Action<P> {
    /// Build an action. No validation is performed.
    #[must_use]
    pub const fn new(component: Component, payload: P) -> Self {
        Self { component, payload }
    }
}

/// Payload vocabulary for single-entity slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelPayload<T> {
    /// Set the slice's loading flag.
    Loading(bool),
    /// Replace the slice's entity wholesale.
    Update(T),
}

impl<T> ModelPayload<T> {
    /// Label used when logging the action.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading(_) => "LOADING",
            Self::Update(_) => "UPDATE",
        }
    }
}

/// Payload vocabulary for list slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPayload<T> {
    /// Set the slice's loading flag.
    Loading(bool),
    /// Replace the slice's items wholesale.
    Update(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Label used when logging the action.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading(_) => "LOADING",
            Self::Update(_) => "UPDATE",
        }
    }
}

/// Action targeting a single-entity slice.
pub type ModelAction<T> = Action<ModelPayload<T>>;

/// Action targeting a list slice.
pub type ListAction<T> = Action<ListPayload<T>>;
