#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/countdown-bar/")]

//! # countdown-bar
//!
//! A countdown bar widget for terminal applications built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs): a
//! proportional-fill bar paired with a numeric readout that counts down in
//! real time from a configurable duration.
//!
//! [![Crates.io](https://img.shields.io/crates/v/countdown-bar.svg)](https://crates.io/crates/countdown-bar)
//! [![Documentation](https://docs.rs/countdown-bar/badge.svg)](https://docs.rs/countdown-bar)
//! [![License](https://img.shields.io/badge/license-MIT-blue.svg)](https://opensource.org/licenses/MIT)
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture pattern used across the
//! bubbletea-rs ecosystem, with `init()`, `update()`, and `view()` methods.
//! While running, a per-frame message chain advances the countdown by
//! wall-clock deltas, so the remaining time stays accurate no matter how
//! frames are paced. When the countdown reaches zero, naturally or through
//! an explicit [`countdown::Model::end`], a one-shot
//! [`countdown::EndedMsg`] is delivered to the host.
//!
//! ## Features
//!
//! - **Real-time countdown** driven by frame timestamps, not tick counts
//! - **Independent visibility** for the bar and the readout
//! - **Tenths-of-a-second readout** below ten seconds remaining
//! - **Theming support** through lipgloss styles, colors, and fill characters
//! - **One-shot completion event** with per-instance identity
//!
//! ## Quick Start
//!
//! Add countdown-bar to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! countdown-bar = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! ```
//!
//! Then embed the widget in a model:
//!
//! ```rust
//! use bubbletea_rs::{Model, Cmd, Msg};
//! use countdown_bar::prelude::*;
//!
//! struct App {
//!     countdown: CountdownBar,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = countdown_new(&[with_duration(30.0), with_running()]);
//!         let cmd = countdown.init();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(ended) = msg.downcast_ref::<EndedMsg>() {
//!             if ended.id == self.countdown.id() {
//!                 // react to completion
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Time left:\n{}", self.countdown.view())
//!     }
//! }
//! ```

pub mod countdown;

pub use countdown::{
    new as countdown_new, with_duration, with_empty_color, with_fill_characters, with_fill_color,
    with_running, with_timer_style, with_width, without_bar, without_timer, CountdownOption,
    EndedMsg, FrameMsg, Model as CountdownBar,
};

/// Prelude module for convenient imports.
///
/// Re-exports the widget type, its constructor, and the configuration
/// options with a single `use` statement:
///
/// ```rust
/// use countdown_bar::prelude::*;
///
/// let countdown = countdown_new(&[with_duration(30.0)]);
/// ```
pub mod prelude {
    pub use crate::countdown::{
        new as countdown_new, with_duration, with_empty_color, with_fill_characters,
        with_fill_color, with_running, with_timer_style, with_width, without_bar, without_timer,
        CountdownOption, EndedMsg, FrameMsg, Model as CountdownBar,
    };
}
