//! The pure countdown state machine.
//!
//! Countdown state is advanced exclusively through [`reduce`], a total
//! function from a state and an action to the next state. The reducer is
//! deliberately unconditional per action: it applies whatever it is handed,
//! and the decision of *whether* an action should be dispatched at all (for
//! example, that `Start` only makes sense from `Idle`) belongs to the
//! wrapping component in [`crate::countdown`]. Keeping the transition logic
//! free of gating makes every transition trivially testable in isolation.
//!
//! ```rust
//! use bubbletea_countdown::reducer::{reduce, Action, CountdownState, State};
//!
//! let state = State::new(10);
//! let state = reduce(state, Action::Start);
//! assert_eq!(state.phase, CountdownState::Running);
//!
//! let state = reduce(state, Action::Tick);
//! assert_eq!(state.seconds, 9);
//! ```

/// Lifecycle phase of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Armed but not yet started, or returned to by a reset.
    Idle,
    /// Actively counting down, one second per tick.
    Running,
    /// Suspended with its remaining time preserved.
    Paused,
    /// Reached zero; remaining time is pinned at zero.
    Completed,
}

/// A countdown's complete reducible state: the remaining whole seconds and
/// the lifecycle phase.
///
/// `seconds` can never be negative (it is unsigned and [`Action::Tick`]
/// saturates at zero), and `phase == Completed` implies `seconds == 0`
/// because [`Action::Complete`] sets both together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Remaining whole seconds.
    pub seconds: u64,
    /// Current lifecycle phase.
    pub phase: CountdownState,
}

impl State {
    /// Creates an idle state armed with `seconds`.
    pub fn new(seconds: u64) -> Self {
        Self {
            seconds,
            phase: CountdownState::Idle,
        }
    }
}

/// A single state-transition request.
///
/// Duration payloads carry already-validated second counts; validation
/// happens at the component boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enter `Running`, leaving the remaining seconds untouched. Used both
    /// to start an idle countdown and to resume a paused one.
    Start,
    /// Enter `Paused`, leaving the remaining seconds untouched.
    Pause,
    /// Return to `Idle`, re-armed with the given duration.
    Reset(u64),
    /// Decrement the remaining seconds by one, saturating at zero. The
    /// phase is untouched.
    Tick,
    /// Enter `Completed` and pin the remaining seconds at zero.
    Complete,
    /// Enter `Running`, re-armed with the given duration.
    Restart(u64),
}

/// Applies `action` to `state` and returns the next state.
///
/// Pure and total: no side effects, no rejected inputs, no hidden reads
/// beyond the action payload.
pub fn reduce(state: State, action: Action) -> State {
    match action {
        Action::Start => State {
            phase: CountdownState::Running,
            ..state
        },
        Action::Pause => State {
            phase: CountdownState::Paused,
            ..state
        },
        Action::Reset(seconds) => State {
            seconds,
            phase: CountdownState::Idle,
        },
        Action::Tick => State {
            seconds: state.seconds.saturating_sub(1),
            ..state
        },
        Action::Complete => State {
            seconds: 0,
            phase: CountdownState::Completed,
        },
        Action::Restart(seconds) => State {
            seconds,
            phase: CountdownState::Running,
        },
    }
}
