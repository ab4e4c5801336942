//! Interactive countdown demo.
//!
//! Keys: `s` start, `space` pause/resume, `r` reset, `R` restart with a
//! fresh 10 seconds, `q` quit.

use bubbletea_countdown::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

struct App {
    countdown: Countdown,
    finished: bool,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut countdown = countdown_new(10.0);
        countdown.style = Style::new().foreground(lipgloss::Color::from("205"));
        (
            Self {
                countdown,
                finished: false,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char('q') => return Some(quit()),
                KeyCode::Char('s') => return Some(self.countdown.start()),
                KeyCode::Char(' ') => {
                    return if self.countdown.running() {
                        Some(self.countdown.pause())
                    } else {
                        Some(self.countdown.resume())
                    };
                }
                KeyCode::Char('r') => {
                    self.finished = false;
                    return Some(self.countdown.reset(None));
                }
                KeyCode::Char('R') => {
                    self.finished = false;
                    return Some(self.countdown.restart(Some(10.0)));
                }
                _ => {}
            }
        }

        if let Some(done) = msg.downcast_ref::<CountdownCompletedMsg>() {
            if done.id == self.countdown.id() {
                self.finished = true;
            }
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let status = if self.finished {
            "Time's up!"
        } else {
            match self.countdown.state() {
                CountdownState::Idle => "ready",
                CountdownState::Running => "running",
                CountdownState::Paused => "paused",
                CountdownState::Completed => "done",
            }
        };

        format!(
            "Countdown: {}  ({})\n\n\
             s: start  space: pause/resume  r: reset  R: restart  q: quit\n",
            self.countdown.view(),
            status
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
