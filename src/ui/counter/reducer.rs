use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // No clamping. i64::MAX wraps to i64::MIN instead of panicking; clicks never get there.
            CounterIntent::Increment => CounterState::new(state.value().wrapping_add(1)),
            CounterIntent::Reset => CounterState::default(),
        }
    }
}
