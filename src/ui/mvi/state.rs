/// Marker trait for UI state.
///
/// `Default` is the freshly mounted state. `PartialEq` lets callers tell
/// whether a transition changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
