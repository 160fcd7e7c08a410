//! Interactive countdown bar demo.
//!
//! Run with `cargo run` from this directory.
//!
//! Keys: space starts/stops, `r` resets, `e` ends immediately, `+`/`-`
//! adjust the duration, `q` quits.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use countdown_bar::prelude::*;
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

struct DemoApp {
    countdown: CountdownBar,
    finished: bool,
}

impl Model for DemoApp {
    fn init() -> (Self, Option<Cmd>) {
        let countdown = countdown_new(&[
            with_duration(15.0),
            with_width(48),
            with_timer_style(Style::new().foreground(Color::from("#FF503A")).bold(true)),
        ]);
        (
            Self {
                countdown,
                finished: false,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(ended) = msg.downcast_ref::<EndedMsg>() {
            if ended.id == self.countdown.id() {
                self.finished = true;
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char('q') | KeyCode::Esc => return Some(quit()),
                KeyCode::Char(' ') => {
                    self.finished = false;
                    return self.countdown.toggle();
                }
                KeyCode::Char('r') => {
                    self.finished = false;
                    self.countdown.reset();
                    return None;
                }
                KeyCode::Char('e') => {
                    return Some(self.countdown.end());
                }
                KeyCode::Char('+') => {
                    self.finished = false;
                    let total = self.countdown.total_seconds();
                    self.countdown.set_total_seconds(total + 5.0);
                    return None;
                }
                KeyCode::Char('-') => {
                    self.finished = false;
                    let total = (self.countdown.total_seconds() - 5.0).max(5.0);
                    self.countdown.set_total_seconds(total);
                    return None;
                }
                _ => return None,
            }
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let status = if self.finished {
            "Time's up!"
        } else if self.countdown.is_running() {
            "Counting down..."
        } else {
            "Paused"
        };

        format!(
            "\n  {}\n\n  {}\n\n  space: start/stop • r: reset • e: end • +/-: duration • q: quit\n",
            self.countdown.view(),
            status,
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<DemoApp>::builder().build()?;
    program.run().await?;
    Ok(())
}
