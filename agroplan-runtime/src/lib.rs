//! Reducer/effect runtime for the AgroPlan dashboard
//!
//! A small Redux/Elm-style core:
//!
//! - **Action**: events that describe state changes, derived with
//!   `#[derive(Action)]`
//! - **EffectStore**: state container whose reducer returns a
//!   [`DispatchResult`] (changed flag + declarative effects)
//! - **TaskManager**: keyed async tasks that send result actions back, scoped
//!   to a lifetime `CancellationToken`
//! - **Component**: pure UI elements rendering from props
//! - **EffectRuntime**: the event/action/render loop tying them together
//!
//! # Async Handler Pattern
//!
//! Async work uses two-phase actions. An intent (`ResolveStart`) makes the
//! reducer emit an effect. The effect handler spawns a task. The task sends
//! back a `Did*` result action (`LocationDidResolve`, `ForecastDidFail`).
//! With `#[action(infer_categories)]` intents and results sharing a prefix
//! land in the same category.

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod middleware;
pub mod runtime;
pub mod tasks;
pub mod testing;

pub use action::{Action, ActionCategory, ActionSummary};
pub use component::Component;
pub use effect::{
    DispatchResult, EffectReducer, EffectStore, EffectStoreLike, EffectStoreWithMiddleware,
};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use middleware::{LoggingMiddleware, Middleware};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome, PollerConfig};
pub use tasks::{TaskKey, TaskManager};

// Derive macro lives in the macro namespace, next to the trait of the same name
pub use agroplan_macros::Action;
