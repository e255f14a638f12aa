//! Middleware hooks around dispatch

use crate::action::{Action, ActionCategory, ActionSummary};

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging or other cross-cutting concerns
/// to an effect store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the action is processed by the reducer
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that logs every action through `tracing`
///
/// The action's [`ActionSummary`] is logged before dispatch (when `verbose`)
/// and its name, category and state-change flag after. Uncategorized actions
/// log `-` as their category.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Also log before dispatch
    pub verbose: bool,
    dispatched: u64,
}

impl LoggingMiddleware {
    /// Log after dispatch only
    pub fn new() -> Self {
        Self::default()
    }

    /// Log both before and after dispatch
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            dispatched: 0,
        }
    }

    /// Number of actions seen so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

/// Category field value for the dispatch log
pub(crate) fn category_label<A: ActionCategory>(action: &A) -> &'static str {
    action.category().unwrap_or("-")
}

impl<A: ActionSummary + ActionCategory> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.verbose {
            tracing::debug!(action = %action.summary(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        self.dispatched += 1;
        tracing::debug!(
            action = %action.name(),
            category = category_label(action),
            state_changed = state_changed,
            "Action processed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Ping;

    impl Action for Ping {
        fn name(&self) -> &'static str {
            "Ping"
        }
    }

    impl ActionSummary for Ping {}

    impl ActionCategory for Ping {
        fn category(&self) -> Option<&'static str> {
            Some("ping")
        }
    }

    #[derive(Clone, Debug)]
    struct Quit;

    impl Action for Quit {
        fn name(&self) -> &'static str {
            "Quit"
        }
    }

    impl ActionCategory for Quit {
        fn category(&self) -> Option<&'static str> {
            None
        }
    }

    #[test]
    fn test_logging_middleware_counts() {
        let mut middleware = LoggingMiddleware::verbose();
        middleware.before(&Ping);
        middleware.after(&Ping, true);
        middleware.after(&Ping, false);
        assert_eq!(middleware.dispatched(), 2);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label(&Ping), "ping");
        assert_eq!(category_label(&Quit), "-");
    }
}
