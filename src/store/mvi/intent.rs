//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Requests dispatched by a view (load, add, update, delete)
/// - Results of those requests (success with payload, or failure)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Clone + Send + 'static {
    /// True for intents that ask for I/O and must be picked up by an effect.
    fn is_request(&self) -> bool;
}
