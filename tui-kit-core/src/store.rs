//! Host-side state store with reducer pattern
//!
//! Widgets emit actions; the host owns the state those actions change. The
//! store is where that state lives (input text, dark-mode flag, selected
//! rows) and the reducer is the only place it changes.

use crate::Action;
use std::marker::PhantomData;
use tracing::{debug, error, info, trace, warn, Level};

/// Applies one action to the state; `true` means the screen is stale
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Owns the host state and funnels every change through one reducer
///
/// # Example
/// ```ignore
/// #[derive(Default)]
/// struct FormState {
///     name: String,
/// }
///
/// #[derive(Action, Clone, Debug)]
/// enum FormAction {
///     NameChange(ValueChange),
/// }
///
/// fn reducer(state: &mut FormState, action: FormAction) -> bool {
///     match action {
///         FormAction::NameChange(change) => {
///             state.name = change.value;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(FormState::default(), reducer);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    /// Apply a widget's batch of actions in order
    ///
    /// Returns `true` if any of them changed the state.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = A>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) | changed)
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// [`Store`] with a [`Middleware`] wrapped around the reducer
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = A>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) | changed)
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Observes actions on their way through the reducer
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    fn after(&mut self, action: &A, state_changed: bool);
}

/// Records each processed action as a `tracing` event
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    level: Level,
    /// Skip actions that left the state untouched
    changes_only: bool,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingMiddleware {
    /// Debug level, every action
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
            changes_only: false,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn changes_only(mut self) -> Self {
        self.changes_only = true;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.changes_only && !state_changed {
            return;
        }
        // `event!` needs a constant level
        let name = action.name();
        match self.level {
            Level::TRACE => trace!(action = name, state_changed, "Action processed"),
            Level::DEBUG => debug!(action = name, state_changed, "Action processed"),
            Level::INFO => info!(action = name, state_changed, "Action processed"),
            Level::WARN => warn!(action = name, state_changed, "Action processed"),
            _ => error!(action = name, state_changed, "Action processed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        text: String,
        dark: bool,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        TextSet(String),
        DarkToggle,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::TextSet(_) => "TextSet",
                TestAction::DarkToggle => "DarkToggle",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> bool {
        match action {
            TestAction::TextSet(text) => {
                let changed = state.text != text;
                state.text = text;
                changed
            }
            TestAction::DarkToggle => {
                state.dark = !state.dark;
                true
            }
            TestAction::NoOp => false,
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(store.dispatch(TestAction::TextSet("hi".into())));
        assert_eq!(store.state().text, "hi");
        assert!(!store.dispatch(TestAction::TextSet("hi".into())));

        assert!(store.dispatch(TestAction::DarkToggle));
        assert!(store.state().dark);
    }

    #[test]
    fn test_dispatch_all_reports_any_change() {
        let mut store = Store::new(TestState::default(), test_reducer);
        assert!(!store.dispatch_all(vec![TestAction::NoOp, TestAction::NoOp]));
        assert!(store.dispatch_all(vec![TestAction::NoOp, TestAction::DarkToggle]));
        assert!(store.state().dark);
        assert!(!store.dispatch_all(Vec::new()));
    }

    #[test]
    fn test_logging_middleware_builder() {
        let middleware = LoggingMiddleware::new().with_level(Level::INFO).changes_only();
        assert_eq!(middleware.level(), Level::INFO);

        let mut store =
            StoreWithMiddleware::new(TestState::default(), test_reducer, middleware);
        assert!(store.dispatch_all(vec![TestAction::TextSet("a".into()), TestAction::NoOp]));
        assert_eq!(store.state().text, "a");
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::DarkToggle);
        store.dispatch(TestAction::NoOp);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().changed_count, 1);
        assert!(store.state().dark);
    }
}
