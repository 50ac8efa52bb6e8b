//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place where a piece of portal state changes.
///
/// Implementations are pure: no clock reads, no randomness, no I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the previous state and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
