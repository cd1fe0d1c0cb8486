//! Reducer trait and dispatch helper.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Apply `intent` to `state`. Must be pure.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state held in `slot`, replacing it in place.
///
/// Returns `true` when the new state differs from the old one.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) -> bool {
    let before = slot.clone();
    *slot = R::reduce(std::mem::take(slot), intent);
    *slot != before
}
