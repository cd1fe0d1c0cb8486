use crate::ui::mvi::UiState;

/// The single state cell owned by a [`CounterView`](super::CounterView).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}
