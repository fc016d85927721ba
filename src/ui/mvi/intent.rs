/// Marker trait for intents.
///
/// An intent is either a user action (move selection, scroll) or the
/// outcome of a fetch that has already passed the generation check.
pub trait Intent: Send + 'static {}
