//! The counter component: one integer, two actions.

mod component;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use component::CounterView;
pub use intent::{CounterIntent, ParseActionError};
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{ViewNode, ViewTree};
