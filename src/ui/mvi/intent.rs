//! Marker trait for intents.

/// An action that a reducer knows how to apply.
///
/// Intents carry no behaviour of their own; a reducer decides what each
/// one means for its state.
pub trait Intent: Send + 'static {}
