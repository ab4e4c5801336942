#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-countdown/")]

//! # bubbletea-countdown
//!
//! A countdown timer component for building terminal applications with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The component follows the Elm Architecture pattern: it is a plain value
//! with `update()` and `view()` methods, driven entirely by messages the
//! runtime delivers to it. Internally it is split the same way its state
//! is: a pure reducer holds every transition, a validator normalizes
//! requested durations, a decomposer projects the remaining seconds into
//! days/hours/minutes/seconds, and the component wraps them with the
//! gating and tick-scheduling an application actually wants.
//!
//! ## Overview
//!
//! - **Lifecycle**: `Idle → Running ⇄ Paused`, completing at zero;
//!   `reset` returns to `Idle`, `restart` jumps straight back to `Running`
//!   with a fresh duration.
//! - **Controls**: [`start`](countdown::Model::start),
//!   [`pause`](countdown::Model::pause), [`resume`](countdown::Model::resume),
//!   [`reset`](countdown::Model::reset), [`restart`](countdown::Model::restart)
//!   — each returns a `Cmd`, and the state change happens when the
//!   resulting message is processed. Calls that do not apply in the
//!   current phase (pausing an idle countdown, resetting a running one)
//!   are silently ignored.
//! - **Durations**: any `f64` is accepted and normalized into
//!   `[1, 8_553_600]` whole seconds (up to 99 days); fractional input
//!   truncates, invalid input clamps. See [`duration`].
//! - **Completion**: the countdown pins itself at zero and delivers one
//!   [`countdown::CompletedMsg`].
//! - **Isolation**: instances carry unique ids, so several countdowns can
//!   run side by side without stealing each other's messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_countdown::prelude::*;
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = countdown_new(25.0 * 60.0); // 25 minutes
//!         let cmd = countdown.start();
//!         (Self { countdown }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CountdownCompletedMsg>() {
//!             if done.id == self.countdown.id() {
//!                 // react to completion
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Remaining: {}", self.countdown.view())
//!     }
//! }
//! ```

pub mod clock;
pub mod countdown;
pub mod duration;
pub mod reducer;

pub use countdown::{
    new as countdown_new, CompletedMsg as CountdownCompletedMsg,
    ControlMsg as CountdownControlMsg, Model as Countdown, TickMsg as CountdownTickMsg,
};
pub use duration::{validate, MAX_SECONDS, MIN_SECONDS};
pub use reducer::{reduce, Action, CountdownState, State};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let countdown = countdown_new(90.0);
/// assert_eq!(countdown.state(), CountdownState::Idle);
/// ```
pub mod prelude {
    pub use crate::countdown::{
        new as countdown_new, CompletedMsg as CountdownCompletedMsg,
        ControlMsg as CountdownControlMsg, Model as Countdown, TickMsg as CountdownTickMsg,
    };
    pub use crate::duration::{validate, MAX_SECONDS, MIN_SECONDS};
    pub use crate::reducer::{reduce, Action, CountdownState, State};
}
