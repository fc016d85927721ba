/// Marker trait for view state.
///
/// `Default` is the unmounted (idle) state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
