//! Effect-based state management
//!
//! Reducers here return [`DispatchResult`]: whether the state changed plus a
//! list of declarative effects. The main loop turns effects into async tasks,
//! so reducers stay synchronous and testable.
//!
//! ```ignore
//! fn reducer(state: &mut FarmState, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::ResolveStart => {
//!             state.phase = Phase::AwaitingLocation;
//!             DispatchResult::changed_with(Effect::Locate)
//!         }
//!         Action::LocationDidResolve(coords) => {
//!             state.coordinates = coords;
//!             DispatchResult::changed_with(Effect::FetchForecast(coords))
//!         }
//!     }
//! }
//! ```

use std::marker::PhantomData;

use crate::action::Action;
use crate::middleware::Middleware;

/// Result of dispatching an action to an effect-aware store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer function that can emit effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// A store whose reducer returns [`DispatchResult<E>`].
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    /// Create a new effect store with the given initial state and reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch an action to the store.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// An effect store with middleware hooks around each dispatch.
pub struct EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Dispatch an action through middleware and store.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

/// Store interface used by [`EffectRuntime`](crate::runtime::EffectRuntime).
pub trait EffectStoreLike<S, A: Action, E> {
    fn dispatch(&mut self, action: A) -> DispatchResult<E>;
    fn state(&self) -> &S;
}

impl<S, A: Action, E> EffectStoreLike<S, A, E> for EffectStore<S, A, E> {
    fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        EffectStore::dispatch(self, action)
    }

    fn state(&self) -> &S {
        EffectStore::state(self)
    }
}

impl<S, A: Action, E, M: Middleware<A>> EffectStoreLike<S, A, E>
    for EffectStoreWithMiddleware<S, A, E, M>
{
    fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        EffectStoreWithMiddleware::dispatch(self, action)
    }

    fn state(&self) -> &S {
        EffectStoreWithMiddleware::state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum SeasonAction {
        Plant,
        Harvest,
        Idle,
    }

    impl Action for SeasonAction {
        fn name(&self) -> &'static str {
            match self {
                SeasonAction::Plant => "Plant",
                SeasonAction::Harvest => "Harvest",
                SeasonAction::Idle => "Idle",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum SeasonEffect {
        Irrigate(u32),
        Report,
    }

    #[derive(Default)]
    struct Field {
        planted: u32,
    }

    fn field_reducer(state: &mut Field, action: SeasonAction) -> DispatchResult<SeasonEffect> {
        match action {
            SeasonAction::Plant => {
                state.planted += 1;
                DispatchResult::changed_with(SeasonEffect::Irrigate(state.planted))
            }
            SeasonAction::Harvest => {
                state.planted = 0;
                DispatchResult::changed().with(SeasonEffect::Report)
            }
            SeasonAction::Idle => DispatchResult::unchanged(),
        }
    }

    #[derive(Default)]
    struct Counting {
        before: usize,
        changed: usize,
    }

    impl<A: Action> Middleware<A> for Counting {
        fn before(&mut self, _action: &A) {
            self.before += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            if state_changed {
                self.changed += 1;
            }
        }
    }

    #[test]
    fn test_dispatch_result_builders() {
        let r: DispatchResult<SeasonEffect> = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(!r.has_effects());

        let r = DispatchResult::effect(SeasonEffect::Report);
        assert!(!r.changed);
        assert_eq!(r.effects, vec![SeasonEffect::Report]);

        let r = DispatchResult::changed_with(SeasonEffect::Report).with(SeasonEffect::Irrigate(1));
        assert!(r.changed);
        assert_eq!(r.effects.len(), 2);
    }

    #[test]
    fn test_effect_store_emits_effects() {
        let mut store = EffectStore::new(Field::default(), field_reducer);

        let result = store.dispatch(SeasonAction::Plant);
        assert!(result.changed);
        assert_eq!(result.effects, vec![SeasonEffect::Irrigate(1)]);
        assert_eq!(store.state().planted, 1);

        let result = store.dispatch(SeasonAction::Idle);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_middleware_sees_every_dispatch() {
        let mut store =
            EffectStoreWithMiddleware::new(Field::default(), field_reducer, Counting::default());

        store.dispatch(SeasonAction::Plant);
        store.dispatch(SeasonAction::Idle);
        let result = store.dispatch(SeasonAction::Harvest);

        assert_eq!(result.effects, vec![SeasonEffect::Report]);
        assert_eq!(store.middleware().before, 3);
        assert_eq!(store.middleware().changed, 2);
        assert_eq!(store.state().planted, 0);
    }
}
