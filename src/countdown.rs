//! Countdown component for Bubble Tea applications.
//!
//! The component owns a [`State`](crate::reducer::State) value and advances
//! it exclusively through the pure reducer in [`crate::reducer`]. Control
//! methods return commands, the runtime delivers the resulting messages
//! back to [`Model::update`], and `update` applies the gating rules (start
//! only from idle, pause only while running, and so on) before anything
//! reaches the reducer. While running, the component keeps a one-second
//! tick command in flight; leaving the running phase stops the stream, and
//! id/tag filtering drops any tick that was already scheduled.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::countdown::new;
//!
//! // Arm a 90-second countdown. Any numeric input is accepted and
//! // normalized to a valid whole-second duration.
//! let countdown = new(90.0);
//! assert_eq!(countdown.total_seconds(), 90);
//! assert_eq!(countdown.minutes(), 1);
//! assert_eq!(countdown.seconds(), 30);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_countdown::countdown::{new, Model, CompletedMsg};
//!
//! struct MyApp {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = new(300.0);
//!         let cmd = countdown.start();
//!         (Self { countdown }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
//!             if done.id == self.countdown.id() {
//!                 // Countdown reached zero.
//!             }
//!         }
//!
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Time remaining: {}", self.countdown.view())
//!     }
//! }
//! ```

use crate::clock;
use crate::duration::validate;
use crate::reducer::{reduce, Action, CountdownState, State};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for countdown instances so that several
/// countdowns can coexist in one application without message conflicts.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Fixed one-second cadence of the countdown tick. Sub-second intervals are
/// out of scope for this component.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One gated control request, produced by the command methods on [`Model`].
#[derive(Debug, Clone, Copy)]
enum Control {
    Start,
    Pause,
    Resume,
    Reset(Option<f64>),
    Restart(Option<f64>),
}

/// Message carrying a control request to a countdown instance.
///
/// Construct these through the command methods ([`Model::start`],
/// [`Model::pause`], [`Model::resume`], [`Model::reset`],
/// [`Model::restart`]); the request itself is private so that gating can
/// never be bypassed.
#[derive(Debug, Clone)]
pub struct ControlMsg {
    /// The unique identifier of the countdown this message targets. An id
    /// of `0` addresses any countdown.
    pub id: i64,
    control: Control,
}

/// Message delivered once per second while a countdown is running.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the countdown that scheduled this tick.
    pub id: i64,
    /// Sequence number of the tick stream; a tick whose tag no longer
    /// matches the countdown's current tag is stale and is dropped.
    tag: i64,
}

/// Message sent exactly once when a countdown reaches zero.
///
/// Applications listen for this in their update loop to react to
/// completion; the countdown itself is already pinned at
/// `Completed` / zero seconds by the time this message is observable.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// The unique identifier of the countdown that completed.
    pub id: i64,
}

/// Countdown timer component.
///
/// Tracks a remaining whole-second count and a lifecycle phase
/// ([`CountdownState`]), advancing one second per tick while running. All
/// mutation flows through [`Model::update`]; the control methods only
/// build commands.
#[derive(Debug, Clone)]
pub struct Model {
    /// Style applied to the rendered remaining time.
    pub style: Style,
    state: State,
    /// Remembered validated initial duration, used by argument-less reset
    /// and restart. Kept outside the reducible state: updating it is not a
    /// transition.
    initial_seconds: u64,
    id: i64,
    tag: i64,
}

/// Creates a countdown armed with `initial_seconds`, in the idle phase.
///
/// The requested duration may be any `f64`; it is normalized with
/// [`crate::duration::validate`], so fractional input truncates and
/// out-of-range or NaN input clamps into `[1, 8_553_600]`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::countdown::new;
/// use bubbletea_countdown::reducer::CountdownState;
///
/// let countdown = new(60.15);
/// assert_eq!(countdown.total_seconds(), 60);
/// assert_eq!(countdown.state(), CountdownState::Idle);
/// ```
pub fn new(initial_seconds: f64) -> Model {
    let validated = validate(initial_seconds);
    Model {
        style: Style::new(),
        state: State::new(validated),
        initial_seconds: validated,
        id: next_id(),
        tag: 0,
    }
}

/// Treats a zero or NaN argument as absent, so `reset(Some(0.0))` falls
/// back to the remembered initial duration exactly like `reset(None)`.
fn provided(new_seconds: Option<f64>) -> Option<f64> {
    new_seconds.filter(|s| *s != 0.0 && !s.is_nan())
}

impl Model {
    /// Returns the unique identifier of this countdown instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the current lifecycle phase.
    pub fn state(&self) -> CountdownState {
        self.state.phase
    }

    /// Returns the remaining whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.state.seconds
    }

    /// Returns the whole days remaining. At most 99, since the armed
    /// duration is capped at 99 days.
    pub fn days(&self) -> u64 {
        clock::days(self.state.seconds)
    }

    /// Returns the whole hours remaining, excluding full days.
    pub fn hours(&self) -> u64 {
        clock::hours(self.state.seconds)
    }

    /// Returns the whole minutes remaining, excluding full hours.
    pub fn minutes(&self) -> u64 {
        clock::minutes(self.state.seconds)
    }

    /// Returns the leftover seconds remaining, excluding full minutes.
    pub fn seconds(&self) -> u64 {
        clock::seconds(self.state.seconds)
    }

    /// Returns the remembered initial duration that argument-less
    /// [`reset`](Model::reset) and [`restart`](Model::restart) re-arm with.
    pub fn initial_seconds(&self) -> u64 {
        self.initial_seconds
    }

    /// Returns whether the countdown is actively counting down.
    pub fn running(&self) -> bool {
        self.state.phase == CountdownState::Running
    }

    /// Returns whether the countdown has reached zero.
    pub fn completed(&self) -> bool {
        self.state.phase == CountdownState::Completed
    }

    /// Generates a command to start an idle countdown.
    ///
    /// Ignored unless the countdown is idle; resuming a paused countdown
    /// uses [`resume`](Model::resume) instead.
    pub fn start(&self) -> Cmd {
        self.command(Control::Start)
    }

    /// Generates a command to pause a running countdown, preserving its
    /// remaining time. Ignored unless the countdown is running.
    pub fn pause(&self) -> Cmd {
        self.command(Control::Pause)
    }

    /// Generates a command to resume a paused countdown. Ignored unless
    /// the countdown is paused.
    pub fn resume(&self) -> Cmd {
        self.command(Control::Resume)
    }

    /// Generates a command to return the countdown to idle, re-armed with
    /// `new_seconds` (normalized) or, when `new_seconds` is absent, zero,
    /// or NaN, with the remembered initial duration.
    ///
    /// Ignored while the countdown is running. When the reset goes through
    /// with a real argument, the remembered initial duration is updated for
    /// future argument-less resets and restarts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    ///
    /// let countdown = new(60.0);
    /// let _rearm = countdown.reset(Some(90.0)); // re-arm with 90 seconds
    /// let _again = countdown.reset(None);       // re-arm with the remembered duration
    /// ```
    pub fn reset(&self, new_seconds: Option<f64>) -> Cmd {
        self.command(Control::Reset(new_seconds))
    }

    /// Generates a command to immediately re-run the countdown from a fresh
    /// duration: `new_seconds` (normalized) or, when absent, zero, or NaN,
    /// the remembered initial duration.
    ///
    /// Ignored while the countdown is idle (an idle countdown is started
    /// with [`start`](Model::start)). When the restart goes through with a
    /// real argument, the remembered initial duration is updated.
    pub fn restart(&self, new_seconds: Option<f64>) -> Cmd {
        self.command(Control::Restart(new_seconds))
    }

    /// Builds the near-immediate self-delivery command for a control
    /// request.
    fn command(&self, control: Control) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ControlMsg { id, control }) as Msg
        })
    }

    /// Schedules the next one-second tick, tagged with the current tick
    /// stream.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Builds the completion notification command.
    fn completed_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id }) as Msg
        })
    }

    /// Opens a fresh tick stream: ticks scheduled before this point carry
    /// an older tag and will be dropped.
    fn begin_ticking(&mut self) -> Cmd {
        self.tag += 1;
        self.tick()
    }

    /// Resolves the duration a reset or restart should re-arm with, and
    /// whether the caller actually supplied one.
    fn resolve_duration(&self, new_seconds: Option<f64>) -> (u64, bool) {
        match provided(new_seconds) {
            Some(s) => (validate(s), true),
            None => (self.initial_seconds, false),
        }
    }

    /// Applies the gating rules for one control request and dispatches the
    /// corresponding action when the request is admissible. Requests that
    /// fail their gate are dropped without touching the state.
    fn handle_control(&mut self, control: Control) -> Option<Cmd> {
        match control {
            Control::Start => {
                if self.state.phase != CountdownState::Idle {
                    return None;
                }
                self.state = reduce(self.state, Action::Start);
                Some(self.begin_ticking())
            }
            Control::Resume => {
                if self.state.phase != CountdownState::Paused {
                    return None;
                }
                self.state = reduce(self.state, Action::Start);
                Some(self.begin_ticking())
            }
            Control::Pause => {
                if self.state.phase != CountdownState::Running {
                    return None;
                }
                self.state = reduce(self.state, Action::Pause);
                None
            }
            Control::Reset(new_seconds) => {
                if self.state.phase == CountdownState::Running {
                    return None;
                }
                let (target, was_provided) = self.resolve_duration(new_seconds);
                if was_provided {
                    self.initial_seconds = target;
                }
                self.state = reduce(self.state, Action::Reset(target));
                None
            }
            Control::Restart(new_seconds) => {
                if self.state.phase == CountdownState::Idle {
                    return None;
                }
                let (target, was_provided) = self.resolve_duration(new_seconds);
                if was_provided {
                    self.initial_seconds = target;
                }
                self.state = reduce(self.state, Action::Restart(target));
                Some(self.begin_ticking())
            }
        }
    }

    /// Processes control and tick messages and advances the countdown.
    ///
    /// Messages for other countdown instances (mismatched id) and stale
    /// ticks (mismatched tag, or any tick arriving outside the running
    /// phase) are ignored. When an accepted tick brings the remaining time
    /// to zero, the countdown moves to `Completed` in the same update and
    /// the returned command delivers a single [`CompletedMsg`]; otherwise
    /// the returned command schedules the next tick.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(control_msg) = msg.downcast_ref::<ControlMsg>() {
            if control_msg.id != 0 && control_msg.id != self.id {
                return None;
            }
            return self.handle_control(control_msg.control);
        }

        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if self.state.phase != CountdownState::Running
                || (tick_msg.id != 0 && tick_msg.id != self.id)
            {
                return None;
            }

            // A tick from a superseded stream would make the countdown run
            // fast; drop it.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return None;
            }

            self.tag += 1;
            self.state = reduce(self.state, Action::Tick);

            if self.state.seconds == 0 {
                self.state = reduce(self.state, Action::Complete);
                return Some(self.completed_cmd());
            }
            return Some(self.tick());
        }

        None
    }

    /// Renders the remaining time through the component's style.
    ///
    /// The format drops leading units while they are zero: `"04:05"`,
    /// `"01:02:03"`, `"2d 03:04:05"`.
    pub fn view(&self) -> String {
        self.style.render(&clock::format(self.state.seconds))
    }
}

impl BubbleTeaModel for Model {
    /// Creates a one-minute countdown and starts it immediately, for
    /// standalone use.
    fn init() -> (Self, Option<Cmd>) {
        let model = new(60.0);
        let cmd = model.start();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// Creates an idle one-minute countdown.
    fn default() -> Self {
        new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{MAX_SECONDS, MIN_SECONDS};

    fn control(model: &Model, control: Control) -> Msg {
        Box::new(ControlMsg {
            id: model.id(),
            control,
        })
    }

    fn tick(model: &Model) -> Msg {
        Box::new(TickMsg {
            id: model.id(),
            tag: model.tag,
        })
    }

    #[test]
    fn test_new_validates_input() {
        assert_eq!(new(60.0).total_seconds(), 60);
        assert_eq!(new(60.15).total_seconds(), 60);
        assert_eq!(new(-3.0).total_seconds(), MIN_SECONDS);
        assert_eq!(new(f64::NAN).total_seconds(), MIN_SECONDS);
        assert_eq!(new(10_000_000.0).total_seconds(), MAX_SECONDS);
    }

    #[test]
    fn test_new_starts_idle() {
        let countdown = new(60.0);
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert!(!countdown.running());
        assert!(!countdown.completed());
        assert_eq!(countdown.initial_seconds(), 60);
    }

    #[test]
    fn test_unique_ids() {
        let a = new(10.0);
        let b = new(10.0);
        assert_ne!(a.id(), b.id());
        assert!(a.id() > 0);
    }

    #[test]
    fn test_clamped_maximum_decomposes_to_99_days() {
        let countdown = new(10_000_000.0);
        assert_eq!(countdown.days(), 99);
        assert_eq!(countdown.hours(), 0);
        assert_eq!(countdown.minutes(), 0);
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_sixty_seconds_is_one_minute() {
        let countdown = new(60.0);
        assert_eq!(countdown.minutes(), 1);
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_start_from_idle() {
        let mut countdown = new(60.0);
        let msg = control(&countdown, Control::Start);
        let cmd = countdown.update(msg);
        assert!(cmd.is_some()); // tick stream begins
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_start_ignored_when_not_idle() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));

        let cmd = countdown.update(control(&countdown, Control::Start));
        assert!(cmd.is_none());
        assert_eq!(countdown.state(), CountdownState::Running);
    }

    #[test]
    fn test_pause_only_while_running() {
        let mut countdown = new(60.0);

        // Idle: pause is a no-op.
        assert!(countdown.update(control(&countdown, Control::Pause)).is_none());
        assert_eq!(countdown.state(), CountdownState::Idle);

        countdown.update(control(&countdown, Control::Start));
        assert!(countdown.update(control(&countdown, Control::Pause)).is_none());
        assert_eq!(countdown.state(), CountdownState::Paused);
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_resume_only_from_paused() {
        let mut countdown = new(60.0);

        // Idle: resume is a no-op.
        assert!(countdown.update(control(&countdown, Control::Resume)).is_none());
        assert_eq!(countdown.state(), CountdownState::Idle);

        countdown.update(control(&countdown, Control::Start));
        countdown.update(control(&countdown, Control::Pause));
        let cmd = countdown.update(control(&countdown, Control::Resume));
        assert!(cmd.is_some());
        assert_eq!(countdown.state(), CountdownState::Running);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut countdown = new(60.0);
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert_eq!(countdown.total_seconds(), 60);

        countdown.update(control(&countdown, Control::Start));
        assert_eq!(countdown.state(), CountdownState::Running);

        countdown.update(control(&countdown, Control::Pause));
        assert_eq!(countdown.state(), CountdownState::Paused);

        countdown.update(control(&countdown, Control::Resume));
        assert_eq!(countdown.state(), CountdownState::Running);

        // Reset while running is dropped by its gate.
        let cmd = countdown.update(control(&countdown, Control::Reset(None)));
        assert!(cmd.is_none());
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_tick_decrements_and_schedules_next() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));

        let cmd = countdown.update(tick(&countdown));
        assert!(cmd.is_some());
        assert_eq!(countdown.total_seconds(), 59);
        assert_eq!(countdown.state(), CountdownState::Running);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut countdown = new(60.0);

        assert!(countdown.update(tick(&countdown)).is_none());
        assert_eq!(countdown.total_seconds(), 60);

        countdown.update(control(&countdown, Control::Start));
        countdown.update(control(&countdown, Control::Pause));
        assert!(countdown.update(tick(&countdown)).is_none());
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_tick_with_wrong_id_rejected() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));

        let foreign = Box::new(TickMsg {
            id: countdown.id() + 999,
            tag: countdown.tag,
        });
        assert!(countdown.update(foreign).is_none());
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_stale_tag_rejected_after_pause_resume() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));
        let stale = Box::new(TickMsg {
            id: countdown.id(),
            tag: countdown.tag,
        });

        countdown.update(control(&countdown, Control::Pause));
        countdown.update(control(&countdown, Control::Resume));

        // The tick scheduled before the pause belongs to a superseded
        // stream and must not land.
        assert!(countdown.update(stale).is_none());
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_counts_down_to_completion() {
        let mut countdown = new(30.0);
        countdown.update(control(&countdown, Control::Start));

        for _ in 0..29 {
            let cmd = countdown.update(tick(&countdown));
            assert!(cmd.is_some());
            assert_eq!(countdown.state(), CountdownState::Running);
        }
        assert_eq!(countdown.total_seconds(), 1);

        // The final tick completes the countdown in the same update.
        let cmd = countdown.update(tick(&countdown));
        assert!(cmd.is_some()); // delivers CompletedMsg
        assert_eq!(countdown.state(), CountdownState::Completed);
        assert_eq!(countdown.total_seconds(), 0);
        assert!(countdown.completed());

        // Completed countdowns ignore any further ticks; the observed
        // remaining time never goes below zero.
        assert!(countdown.update(tick(&countdown)).is_none());
        assert_eq!(countdown.total_seconds(), 0);
    }

    #[test]
    fn test_reset_rearms_with_new_duration() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));
        countdown.update(tick(&countdown));
        countdown.update(control(&countdown, Control::Pause));

        countdown.update(control(&countdown, Control::Reset(Some(45.0))));
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert_eq!(countdown.total_seconds(), 45);
        assert_eq!(countdown.initial_seconds(), 45);
    }

    #[test]
    fn test_reset_without_argument_reuses_initial() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));
        countdown.update(tick(&countdown));
        countdown.update(control(&countdown, Control::Pause));
        assert_eq!(countdown.total_seconds(), 59);

        countdown.update(control(&countdown, Control::Reset(None)));
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_reset_zero_falls_back_to_initial() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));
        countdown.update(control(&countdown, Control::Pause));

        // A zero argument counts as absent, not as a 1-second clamp.
        countdown.update(control(&countdown, Control::Reset(Some(0.0))));
        assert_eq!(countdown.total_seconds(), 60);
        assert_eq!(countdown.initial_seconds(), 60);
    }

    #[test]
    fn test_gated_out_reset_leaves_initial_untouched() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));

        // Dropped by the not-running gate, so the remembered duration must
        // not change either.
        countdown.update(control(&countdown, Control::Reset(Some(45.0))));
        assert_eq!(countdown.initial_seconds(), 60);
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_restart_ignored_while_idle() {
        let mut countdown = new(60.0);

        let cmd = countdown.update(control(&countdown, Control::Restart(Some(30.0))));
        assert!(cmd.is_none());
        assert_eq!(countdown.state(), CountdownState::Idle);
        assert_eq!(countdown.total_seconds(), 60);
        assert_eq!(countdown.initial_seconds(), 60);
    }

    #[test]
    fn test_restart_without_argument_reuses_initial() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));
        countdown.update(tick(&countdown));
        assert_eq!(countdown.total_seconds(), 59);

        let cmd = countdown.update(control(&countdown, Control::Restart(None)));
        assert!(cmd.is_some());
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.total_seconds(), 60);
    }

    #[test]
    fn test_restart_updates_remembered_duration() {
        let mut countdown = new(60.0);
        countdown.update(control(&countdown, Control::Start));

        countdown.update(control(&countdown, Control::Restart(Some(30.0))));
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.total_seconds(), 30);
        assert_eq!(countdown.initial_seconds(), 30);

        // Argument-less reset now re-arms with the updated duration.
        countdown.update(control(&countdown, Control::Pause));
        countdown.update(control(&countdown, Control::Reset(None)));
        assert_eq!(countdown.total_seconds(), 30);
    }

    #[test]
    fn test_restart_from_completed() {
        let mut countdown = new(1.0);
        countdown.update(control(&countdown, Control::Start));
        countdown.update(tick(&countdown));
        assert!(countdown.completed());

        let cmd = countdown.update(control(&countdown, Control::Restart(None)));
        assert!(cmd.is_some());
        assert_eq!(countdown.state(), CountdownState::Running);
        assert_eq!(countdown.total_seconds(), 1);
    }

    #[test]
    fn test_control_with_wrong_id_rejected() {
        let mut countdown = new(60.0);
        let foreign = Box::new(ControlMsg {
            id: countdown.id() + 999,
            control: Control::Start,
        });
        assert!(countdown.update(foreign).is_none());
        assert_eq!(countdown.state(), CountdownState::Idle);
    }

    #[test]
    fn test_command_methods_return_commands() {
        let countdown = new(60.0);
        let _start = countdown.start();
        let _pause = countdown.pause();
        let _resume = countdown.resume();
        let _reset = countdown.reset(Some(30.0));
        let _restart = countdown.restart(None);
    }

    #[test]
    fn test_view_formats_remaining_time() {
        let countdown = new(65.0);
        assert_eq!(countdown.view(), "01:05");

        let long = new(86_400.0);
        assert_eq!(long.view(), "1d 00:00:00");
    }

    #[test]
    fn test_default_model() {
        let countdown = Model::default();
        assert_eq!(countdown.total_seconds(), 60);
        assert_eq!(countdown.state(), CountdownState::Idle);
    }
}
