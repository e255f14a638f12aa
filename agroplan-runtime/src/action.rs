//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state, or the results of async work
/// coming back into the store. They should be:
/// - Clone: middleware sees the action before the reducer consumes it
/// - Debug: for logging
/// - Send + 'static: results are produced on spawned tasks
///
/// Use `#[derive(Action)]` to implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Category lookup generated by `#[action(infer_categories)]`
///
/// Variants sharing a name prefix (`LocationDidResolve`, `LocationDidFail`)
/// share a category (`"location"`), which keeps log filtering readable.
pub trait ActionCategory: Action {
    /// The category name, or `None` for uncategorized actions
    fn category(&self) -> Option<&'static str>;
}

/// Short, log-friendly rendering of an action
///
/// The default falls back to `Debug`. Override it for actions that carry
/// bulky payloads.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
