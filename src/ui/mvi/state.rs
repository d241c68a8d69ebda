//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned into the reducer and compared in tests, so they must be
/// self-contained: everything the view needs to draw the form, nothing that
/// owns a task or a socket.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
