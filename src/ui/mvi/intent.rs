//! Base trait for intents.

/// Marker trait for intent objects: user actions (key presses, edits)
/// and system events (timer ticks, generation results).
pub trait Intent: Send + 'static {}
