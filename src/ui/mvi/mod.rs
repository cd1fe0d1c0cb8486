//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── input ───────────┘
//! ```
//!
//! - **State**: everything a view needs to render
//! - **Intent**: a user action, e.g. a button click
//! - **Reducer**: the pure transition `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
