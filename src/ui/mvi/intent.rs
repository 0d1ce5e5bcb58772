/// Marker trait for intents: user edits, clicks, and store outcomes
/// reported back to a view.
pub trait Intent: Send + 'static {}
