//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` must stay pure: (State, Intent) -> State, no I/O, no timers.
/// Side effects (spawning work, touching the clipboard) belong to the
/// caller, which inspects the new state to decide what to run.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
