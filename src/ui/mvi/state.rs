//! Base trait for UI state.

/// Marker trait for UI state: cloneable, comparable, with a sensible
/// default, and holding everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
