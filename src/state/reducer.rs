// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Action and reducer primitives.
//!
//! Actions are closed enums, one per state machine. Each variant wraps a
//! payload type implementing [`Payload`], which carries the action's string
//! tag, builds the enum value, and narrows an arbitrary action of the family
//! back to the payload. Reducers report "no change" with `None`, which
//! [`apply`] turns into handing back the very same state allocation.

use std::fmt;
use std::sync::Arc;

/// A tagged, immutable description of an intended state change.
pub trait Action: fmt::Debug {
    /// Stable tag of the action kind, e.g. `"MOVE_PHOTO"`.
    fn action_type(&self) -> &'static str;
}

/// Payload of one action kind within the family `Self::Action`.
pub trait Payload: Sized {
    type Action: Action;

    /// Tag shared by every action built from this payload type.
    const TYPE: &'static str;

    /// Wrap the payload into its action.
    fn into_action(self) -> Self::Action;

    /// Borrow the payload if `action` carries this payload type.
    fn matched(action: &Self::Action) -> Option<&Self>;

    /// Whether `action` is of this payload's kind.
    fn matches(action: &Self::Action) -> bool {
        action.action_type() == Self::TYPE
    }
}

/// Pure transition function of a state machine.
pub trait Reducer {
    type State;
    type Action: Action;

    /// Compute the next state, or `None` to leave `state` untouched.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Option<Self::State>;
}

/// Run one (possibly absent) action through `reducer`.
///
/// Returns `state` itself (same allocation) when there is no action or the
/// reducer declines it.
pub fn apply<R: Reducer>(
    reducer: &R,
    state: &Arc<R::State>,
    action: Option<&R::Action>,
) -> Arc<R::State> {
    match action.and_then(|action| reducer.reduce(state, action)) {
        Some(next) => Arc::new(next),
        None => Arc::clone(state),
    }
}

/// A reducer together with its current state.
pub struct Store<R: Reducer> {
    reducer: R,
    state: Arc<R::State>,
}

impl<R: Reducer> Store<R> {
    pub fn new(reducer: R, initial_state: R::State) -> Self {
        Self {
            reducer,
            state: Arc::new(initial_state),
        }
    }

    pub fn state(&self) -> &Arc<R::State> {
        &self.state
    }

    /// Dispatch an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: R::Action) -> bool {
        let next = apply(&self.reducer, &self.state, Some(&action));
        let changed = !Arc::ptr_eq(&next, &self.state);
        log::debug!(
            "{} {}",
            action.action_type(),
            if changed { "applied" } else { "ignored" }
        );
        self.state = next;
        changed
    }
}

impl<R> Default for Store<R>
where
    R: Reducer + Default,
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::default(), R::State::default())
    }
}

impl<R> fmt::Debug for Store<R>
where
    R: Reducer,
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("state", &self.state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        n: i64,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct AddPayload {
        dn: i64,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ResetPayload;

    #[derive(Debug, Clone, PartialEq)]
    enum CounterAction {
        Add(AddPayload),
        Reset(ResetPayload),
    }

    impl Action for CounterAction {
        fn action_type(&self) -> &'static str {
            match self {
                CounterAction::Add(_) => AddPayload::TYPE,
                CounterAction::Reset(_) => ResetPayload::TYPE,
            }
        }
    }

    impl fmt::Display for CounterAction {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.action_type())
        }
    }

    impl Payload for AddPayload {
        type Action = CounterAction;
        const TYPE: &'static str = "TEST_ACTION";

        fn into_action(self) -> CounterAction {
            CounterAction::Add(self)
        }

        fn matched(action: &CounterAction) -> Option<&Self> {
            match action {
                CounterAction::Add(payload) => Some(payload),
                _ => None,
            }
        }
    }

    impl Payload for ResetPayload {
        type Action = CounterAction;
        const TYPE: &'static str = "RESET";

        fn into_action(self) -> CounterAction {
            CounterAction::Reset(self)
        }

        fn matched(action: &CounterAction) -> Option<&Self> {
            match action {
                CounterAction::Reset(payload) => Some(payload),
                _ => None,
            }
        }
    }

    #[derive(Default)]
    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Action = CounterAction;

        fn reduce(&self, state: &Counter, action: &CounterAction) -> Option<Counter> {
            match action {
                CounterAction::Add(AddPayload { dn }) => Some(Counter { n: state.n + dn }),
                // Already at zero: nothing to do.
                CounterAction::Reset(_) if state.n == 0 => None,
                CounterAction::Reset(_) => Some(Counter::default()),
            }
        }
    }

    #[test]
    fn test_payload_builds_tagged_action() {
        let action = AddPayload { dn: 123 }.into_action();
        assert_eq!(action.action_type(), "TEST_ACTION");
        assert_eq!(action.to_string(), "TEST_ACTION");
        assert!(AddPayload::matches(&action));
        assert!(!ResetPayload::matches(&action));
        assert_eq!(AddPayload::matched(&action), Some(&AddPayload { dn: 123 }));
        assert_eq!(ResetPayload::matched(&action), None);
    }

    #[test]
    fn test_apply_runs_reducer() {
        let state = Arc::new(Counter { n: 50 });
        let next = apply(&CounterReducer, &state, Some(&AddPayload { dn: 5 }.into_action()));
        assert_eq!(*next, Counter { n: 55 });
        assert!(!Arc::ptr_eq(&next, &state));
    }

    #[test]
    fn test_apply_without_action_returns_same_state() {
        let state = Arc::new(Counter { n: 7 });
        let next = apply(&CounterReducer, &state, None);
        assert!(Arc::ptr_eq(&next, &state));
    }

    #[test]
    fn test_declined_action_returns_same_state() {
        let state = Arc::new(Counter::default());
        let next = apply(&CounterReducer, &state, Some(&ResetPayload.into_action()));
        assert!(Arc::ptr_eq(&next, &state));
    }

    #[test]
    fn test_store_dispatch() {
        let mut store: Store<CounterReducer> = Store::default();
        assert_eq!(store.state().n, 0);

        assert!(store.dispatch(AddPayload { dn: 12 }.into_action()));
        assert_eq!(store.state().n, 12);

        assert!(store.dispatch(ResetPayload.into_action()));
        assert!(!store.dispatch(ResetPayload.into_action()));
        assert_eq!(store.state().n, 0);
    }
}
