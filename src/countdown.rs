//! Countdown bar component for Bubble Tea applications.
//!
//! A horizontal progress bar paired with a numeric readout that counts down
//! in real time from a configurable duration. The bar drains proportionally
//! as time runs out and the readout switches to tenths of a second below ten
//! seconds remaining, matching the pacing cues of game and quiz interfaces.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_bar::countdown::{new, with_duration, with_width};
//!
//! // A 30 second countdown with default styling
//! let countdown = new(&[with_duration(30.0)]);
//!
//! // A narrower bar
//! let countdown = new(&[with_duration(30.0), with_width(20)]);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! The component follows the Elm Architecture: frames arrive as messages,
//! `update` advances the countdown, and `view` renders the current state.
//! Completion is announced with an [`EndedMsg`] that the host can match on.
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use countdown_bar::countdown::{new, with_duration, with_running, EndedMsg, Model};
//!
//! struct MyApp {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = new(&[with_duration(30.0), with_running()]);
//!         let cmd = countdown.init();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(ended) = msg.downcast_ref::<EndedMsg>() {
//!             if ended.id == self.countdown.id() {
//!                 // Time's up!
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! # Start/Stop Control
//!
//! ```rust
//! use countdown_bar::countdown::{new, with_duration};
//!
//! let mut countdown = new(&[with_duration(60.0)]);
//!
//! let cmd = countdown.start();  // begin counting down
//! countdown.stop();             // pause, keeping the remaining time
//! let cmd = countdown.toggle(); // flip between the two
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

// Internal ID management for countdown bar instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for countdown bar instances.
///
/// Each instance gets its own ID so that several bars can coexist in one
/// application without stealing each other's frame messages. IDs are handed
/// out atomically and start from 1.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

// Frames per second while the countdown is running.
const FPS: u32 = 60;
const DEFAULT_WIDTH: i32 = 40;
const DEFAULT_DURATION_SECS: f64 = 10.0;
const DEFAULT_FULL_COLOR: &str = "#FF503A";
const DEFAULT_EMPTY_COLOR: &str = "#606060";

/// Formats a remaining-seconds value for the numeric readout.
///
/// Values of ten or more render as a floored integer with no decimal point.
/// Below ten the value is floored to one decimal place, so `9.99` renders as
/// `"9.9"` (never rounding up to `"10.0"`) and an exact `6.0` keeps its
/// trailing digit as `"6.0"`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_remaining(42.7), "42");
/// assert_eq!(format_remaining(9.99), "9.9");
/// assert_eq!(format_remaining(6.0), "6.0");
/// ```
fn format_remaining(secs: f64) -> String {
    if secs >= 10.0 {
        format!("{}", secs.floor() as i64)
    } else {
        format!("{:.1}", (secs * 10.0).floor() / 10.0)
    }
}

/// Configuration options for customizing countdown bar behavior and
/// appearance.
///
/// Options are applied in order during construction, so later options win
/// when two touch the same setting.
///
/// # Examples
///
/// ```rust
/// use countdown_bar::countdown::{new, with_duration, with_fill_color, without_timer};
///
/// let countdown = new(&[
///     with_duration(90.0),
///     with_fill_color("#2ED573".to_string()),
///     without_timer(),
/// ]);
/// ```
pub enum CountdownOption {
    /// Sets the countdown duration in seconds. The remaining time is
    /// initialized to the same value.
    WithDuration(f64),
    /// Sets the total rendered width in characters, including the readout.
    WithWidth(i32),
    /// Customizes the characters used for the filled and empty portions of
    /// the bar. First character fills, second empties.
    WithFillCharacters(char, char),
    /// Sets the color of the filled portion (remaining time).
    WithFillColor(String),
    /// Sets the color of the drained portion.
    WithEmptyColor(String),
    /// Applies a lipgloss style to the numeric readout.
    WithTimerStyle(Style),
    /// Hides the numeric readout, leaving only the bar.
    WithoutTimer,
    /// Hides the bar, leaving only the numeric readout.
    WithoutBar,
    /// Constructs the countdown already running, so that `init` schedules
    /// the first frame immediately.
    WithRunning,
}

impl CountdownOption {
    fn apply(&self, m: &mut Model) {
        match self {
            CountdownOption::WithDuration(secs) => {
                m.set_total_seconds(*secs);
            }
            CountdownOption::WithWidth(width) => {
                m.width = *width;
            }
            CountdownOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            CountdownOption::WithFillColor(color) => {
                m.full_color = color.clone();
            }
            CountdownOption::WithEmptyColor(color) => {
                m.empty_color = color.clone();
            }
            CountdownOption::WithTimerStyle(style) => {
                m.timer_style = style.clone();
            }
            CountdownOption::WithoutTimer => {
                m.show_timer = false;
            }
            CountdownOption::WithoutBar => {
                m.show_bar = false;
            }
            CountdownOption::WithRunning => {
                m.running = true;
            }
        }
    }
}

/// Sets the countdown duration in seconds.
///
/// The remaining time is initialized to the same value, so a freshly built
/// bar always starts full.
///
/// # Examples
///
/// ```rust
/// use countdown_bar::countdown::{new, with_duration};
///
/// let countdown = new(&[with_duration(30.0)]);
/// assert_eq!(countdown.total_seconds(), 30.0);
/// assert_eq!(countdown.remaining(), 30.0);
/// ```
pub fn with_duration(secs: f64) -> CountdownOption {
    CountdownOption::WithDuration(secs)
}

/// Sets the total width of the widget in characters.
///
/// The width covers both the bar and the readout; the bar shrinks to make
/// room for the readout when both are visible. The width can also be
/// adjusted later through the `width` field for responsive layouts.
pub fn with_width(w: i32) -> CountdownOption {
    CountdownOption::WithWidth(w)
}

/// Customizes the characters used for the filled and empty bar sections.
///
/// # Examples
///
/// ```rust
/// use countdown_bar::countdown::{new, with_fill_characters};
///
/// // Classic ASCII style
/// let countdown = new(&[with_fill_characters('=', '-')]);
/// ```
pub fn with_fill_characters(full: char, empty: char) -> CountdownOption {
    CountdownOption::WithFillCharacters(full, empty)
}

/// Sets the color of the filled (remaining time) portion of the bar.
///
/// Accepts hex codes (`"#ff503a"`) or ANSI color names.
pub fn with_fill_color(color: String) -> CountdownOption {
    CountdownOption::WithFillColor(color)
}

/// Sets the color of the drained portion of the bar.
pub fn with_empty_color(color: String) -> CountdownOption {
    CountdownOption::WithEmptyColor(color)
}

/// Applies a lipgloss style to the numeric readout.
///
/// # Examples
///
/// ```rust
/// use countdown_bar::countdown::{new, with_timer_style};
/// use lipgloss_extras::prelude::*;
///
/// let countdown = new(&[
///     with_timer_style(Style::new().foreground(Color::from("#FF503A")).bold(true)),
/// ]);
/// ```
pub fn with_timer_style(style: Style) -> CountdownOption {
    CountdownOption::WithTimerStyle(style)
}

/// Hides the numeric readout, leaving only the bar.
pub fn without_timer() -> CountdownOption {
    CountdownOption::WithoutTimer
}

/// Hides the bar, leaving only the numeric readout.
pub fn without_bar() -> CountdownOption {
    CountdownOption::WithoutBar
}

/// Constructs the countdown already running.
///
/// With this option, [`Model::init`] returns the first frame command, so the
/// bar starts draining as soon as the program is up, as if the host had
/// flipped the running switch before first render.
pub fn with_running() -> CountdownOption {
    CountdownOption::WithRunning
}

/// Message delivered on every animation frame while the countdown runs.
///
/// Frames are produced by the tick command chain at 60 frames per second
/// and carry the instant at which they fired; the countdown uses the
/// difference between consecutive frame instants to advance, so the rate of
/// message delivery never changes how fast time passes.
///
/// Frame messages are filtered: a frame whose instance id or chain tag does
/// not match the receiving model, or that arrives while the countdown is
/// stopped, is ignored. Stopping the countdown bumps the tag, which is what
/// releases an already-scheduled frame.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// Instance the frame belongs to.
    id: i64,
    /// Chain tag; frames from a cancelled chain are rejected.
    tag: i64,
    /// When the frame fired.
    at: Instant,
}

/// Message emitted when the countdown reaches zero.
///
/// Sent exactly once per run to completion, whether the countdown expired
/// naturally or was forced down with [`Model::end`]. The message carries no
/// payload beyond the instance id; hosts compare it against [`Model::id`] to
/// tell their bars apart.
///
/// # Examples
///
/// ```rust
/// use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
/// use countdown_bar::countdown::{new, with_duration, EndedMsg};
///
/// struct App {
///     countdown: countdown_bar::countdown::Model,
///     done: bool,
/// }
///
/// impl BubbleTeaModel for App {
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         if let Some(ended) = msg.downcast_ref::<EndedMsg>() {
///             if ended.id == self.countdown.id() {
///                 self.done = true;
///             }
///         }
///         self.countdown.update(msg)
///     }
/// #   fn init() -> (Self, Option<Cmd>) {
/// #       (Self { countdown: new(&[with_duration(5.0)]), done: false }, None)
/// #   }
/// #   fn view(&self) -> String { self.countdown.view() }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EndedMsg {
    /// Identifier of the countdown bar that finished.
    pub id: i64,
}

/// A countdown bar: proportional fill plus a numeric readout.
///
/// The model owns a configured duration and the time remaining, and renders
/// them as two independently hideable regions: a bar that drains as time
/// passes and a readout that shows whole seconds, then tenths below ten
/// seconds. While running, a per-frame message chain advances the remaining
/// time by wall-clock deltas, so the countdown stays accurate regardless of
/// frame pacing.
///
/// All operations are total: no method validates its input or returns an
/// error. A zero duration renders as an empty bar rather than dividing by
/// zero, and out-of-range values flow through the fill math and are clamped
/// only at render time.
///
/// # Examples
///
/// ```rust
/// use countdown_bar::countdown::{new, with_duration};
///
/// let mut countdown = new(&[with_duration(30.0)]);
/// assert!(!countdown.is_running());
///
/// let cmd = countdown.start();
/// assert!(countdown.is_running());
/// assert!(cmd.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// An identifier to keep us from receiving frames intended for other
    /// countdown bars.
    id: i64,
    /// An identifier to keep us from acting on frames of a cancelled chain.
    tag: i64,

    total_seconds: f64,
    remaining: f64,
    running: bool,
    /// Instant of the previously processed frame; `Some` only mid-run.
    last_tick: Option<Instant>,

    /// Total width of the rendered widget, including the readout, if shown.
    pub width: i32,
    /// "Filled" sections of the bar.
    pub full: char,
    /// Color used for the filled portion (hex or named color string).
    pub full_color: String,
    /// "Empty" sections of the bar.
    pub empty: char,
    /// Color used for the empty portion (hex or named color string).
    pub empty_color: String,
    /// Whether the numeric readout is rendered.
    pub show_timer: bool,
    /// Whether the bar is rendered.
    pub show_bar: bool,
    /// Lipgloss style applied to the readout text.
    pub timer_style: Style,
}

/// Creates a new countdown bar with the specified configuration options.
///
/// # Default Configuration
///
/// - **Duration**: 10 seconds, remaining time equal to it
/// - **State**: not running; both the bar and the readout visible
/// - **Width**: 40 characters
/// - **Fill characters**: '█' filled, '░' empty
/// - **Colors**: `#FF503A` fill, `#606060` empty
///
/// # Examples
///
/// ```rust
/// use countdown_bar::countdown::{new, with_duration, with_width, without_bar};
///
/// let defaults = new(&[]);
/// assert_eq!(defaults.total_seconds(), 10.0);
/// assert_eq!(defaults.width, 40);
///
/// let quiz_clock = new(&[
///     with_duration(20.0),
///     with_width(30),
/// ]);
///
/// let plain_readout = new(&[with_duration(20.0), without_bar()]);
/// ```
pub fn new(opts: &[CountdownOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        total_seconds: DEFAULT_DURATION_SECS,
        remaining: DEFAULT_DURATION_SECS,
        running: false,
        last_tick: None,
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: DEFAULT_FULL_COLOR.to_string(),
        empty: '░',
        empty_color: DEFAULT_EMPTY_COLOR.to_string(),
        show_timer: true,
        show_bar: true,
        timer_style: Style::new(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Returns the unique identifier of this countdown bar instance.
    ///
    /// Use it to match [`EndedMsg`] notifications when more than one bar is
    /// embedded in the same application.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the configured countdown duration in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Returns the time left in seconds.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Returns whether the countdown is actively advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the fill fraction of the bar.
    ///
    /// Defined as `remaining / total_seconds`, with a zero duration giving
    /// 0 rather than dividing by zero. The value is not clamped here (a
    /// host-set remaining time beyond the duration yields a fraction above
    /// 1), but rendering clamps the drawn fill to the bar width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_bar::countdown::{new, with_duration};
    ///
    /// let countdown = new(&[with_duration(30.0)]);
    /// assert_eq!(countdown.percent(), 1.0);
    ///
    /// let empty = new(&[with_duration(0.0)]);
    /// assert_eq!(empty.percent(), 0.0);
    /// ```
    pub fn percent(&self) -> f64 {
        if self.total_seconds == 0.0 {
            0.0
        } else {
            self.remaining / self.total_seconds
        }
    }

    /// Sets the countdown duration in seconds.
    ///
    /// Changing the duration also reinitializes the remaining time to the
    /// new value, synchronously, so the bar snaps back to full. No
    /// validation is applied; a negative duration flows into the fill math
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_bar::countdown::{new, with_duration};
    ///
    /// let mut countdown = new(&[with_duration(10.0)]);
    /// countdown.set_total_seconds(20.0);
    /// assert_eq!(countdown.remaining(), 20.0);
    /// assert_eq!(countdown.percent(), 1.0);
    /// ```
    pub fn set_total_seconds(&mut self, secs: f64) {
        self.total_seconds = secs;
        self.remaining = secs;
    }

    /// Sets the remaining time directly, without clamping.
    ///
    /// The host is trusted to supply sane values; anything outside
    /// `[0, total_seconds]` simply flows into the fill and readout math.
    pub fn set_remaining(&mut self, secs: f64) {
        self.remaining = secs;
    }

    /// Starts the countdown.
    ///
    /// Sets the running flag and returns the command that begins the frame
    /// chain. If the countdown is already running the call is a no-op and
    /// returns `None`: the live chain keeps going, and there is never more
    /// than one chain per instance.
    ///
    /// The first frame after a start contributes a zero delta (it only
    /// records its timestamp), so pausing and resuming never double-counts
    /// time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_bar::countdown::{new, with_duration};
    ///
    /// let mut countdown = new(&[with_duration(30.0)]);
    ///
    /// let cmd = countdown.start();
    /// assert!(cmd.is_some());
    ///
    /// // Starting again while running changes nothing.
    /// assert!(countdown.start().is_none());
    /// ```
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running {
            return None;
        }
        self.running = true;
        self.tag += 1;
        Some(self.next_frame())
    }

    /// Stops the countdown, keeping the remaining time.
    ///
    /// Clears the frame-to-frame timestamp and bumps the chain tag, which
    /// orphans any frame message already in flight; that is the release of
    /// the pending animation callback. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
        self.tag += 1;
    }

    /// Stops the countdown and forces it to zero.
    ///
    /// Always returns the command that emits [`EndedMsg`], even when the
    /// countdown was already stopped at zero: an explicit end is announced
    /// unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_bar::countdown::{new, with_duration};
    ///
    /// let mut countdown = new(&[with_duration(30.0)]);
    /// let _ = countdown.start();
    ///
    /// let ended_cmd = countdown.end();
    /// assert_eq!(countdown.remaining(), 0.0);
    /// assert!(!countdown.is_running());
    /// ```
    pub fn end(&mut self) -> Cmd {
        self.stop();
        self.remaining = 0.0;
        self.ended()
    }

    /// Resets the remaining time to the configured duration.
    ///
    /// Reuses the duration-changed path, so the running state is untouched:
    /// a countdown that is mid-run is neither paused nor restarted, and its
    /// live frame chain keeps ticking against the reinitialized value on the
    /// next frame. Call [`Model::stop`] first for a pause-and-reset.
    pub fn reset(&mut self) {
        self.set_total_seconds(self.total_seconds);
    }

    /// Toggles between running and stopped.
    ///
    /// Returns the start command when this call started the countdown,
    /// `None` when it stopped it.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running {
            self.stop();
            None
        } else {
            self.start()
        }
    }

    /// Internal frame command for the tick chain.
    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

        bubbletea_tick(duration, move |_| {
            Box::new(FrameMsg {
                id,
                tag,
                at: Instant::now(),
            }) as Msg
        })
    }

    /// Internal command that delivers the ended notification.
    fn ended(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(EndedMsg { id }) as Msg
        })
    }

    /// Returns the command that starts the frame chain, if the countdown
    /// was constructed running.
    ///
    /// Call once when wiring the component into a program, mirroring the
    /// `Init` contract of the other widgets. For a bar built without
    /// [`with_running`], this returns `None` and the chain starts on the
    /// first [`Model::start`].
    pub fn init(&self) -> Option<Cmd> {
        if self.running {
            Some(self.next_frame())
        } else {
            None
        }
    }

    /// Processes messages and advances the countdown.
    ///
    /// Handles [`FrameMsg`] values belonging to this instance's live chain;
    /// everything else is ignored and returns `None`.
    ///
    /// On an accepted frame, the remaining time decreases by the wall-clock
    /// delta since the previous frame (zero for the first frame after a
    /// start). When the remaining time crosses below zero it is clamped to
    /// zero, the countdown stops, and the returned command emits
    /// [`EndedMsg`] instead of scheduling another frame.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            if frame.id != self.id || frame.tag != self.tag || !self.running {
                return None;
            }

            let delta = match self.last_tick {
                Some(prev) => frame.at.saturating_duration_since(prev).as_secs_f64(),
                None => 0.0,
            };
            self.last_tick = Some(frame.at);

            self.remaining -= delta;

            if self.remaining < 0.0 {
                self.stop();
                self.remaining = 0.0;
                return Some(self.ended());
            }

            return Some(self.next_frame());
        }

        None
    }

    /// Renders the countdown bar in its current state.
    ///
    /// The output is the bar followed by the readout; either region
    /// disappears when its visibility flag is off, and hiding both yields an
    /// empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_bar::countdown::{new, with_duration};
    ///
    /// let countdown = new(&[with_duration(30.0)]);
    /// let frame = countdown.view();
    /// // Full bar plus " 30" readout
    /// ```
    pub fn view(&self) -> String {
        self.view_as(self.remaining)
    }

    /// Renders the countdown bar as if the given time were remaining.
    ///
    /// Bypasses the internal state, which is useful for static displays and
    /// for previewing styling at a known fill level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_bar::countdown::{new, with_duration};
    ///
    /// let countdown = new(&[with_duration(30.0)]);
    /// let half = countdown.view_as(15.0);
    /// let done = countdown.view_as(0.0);
    /// ```
    pub fn view_as(&self, remaining: f64) -> String {
        let timer_view = self.timer_view(remaining);
        let timer_width = lipgloss::width_visible(&timer_view) as i32;
        let bar_view = self.bar_view(remaining, timer_width);

        format!("{}{}", bar_view, timer_view)
    }

    /// Internal method to render the bar region.
    fn bar_view(&self, remaining: f64, text_width: i32) -> String {
        if !self.show_bar {
            return String::new();
        }

        let fraction = if self.total_seconds == 0.0 {
            0.0
        } else {
            remaining / self.total_seconds
        };

        let tw = std::cmp::max(0, self.width - text_width); // bar width
        let fw = std::cmp::max(
            0,
            std::cmp::min(tw, ((tw as f64) * fraction).round() as i32),
        ); // filled width

        let mut result = String::new();

        let full_styled = Style::new()
            .foreground(Color::from(self.full_color.as_str()))
            .render(&self.full.to_string());
        result.push_str(&full_styled.repeat(fw as usize));

        let empty_styled = Style::new()
            .foreground(Color::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());
        result.push_str(&empty_styled.repeat((tw - fw) as usize));

        result
    }

    /// Internal method to render the readout region.
    fn timer_view(&self, remaining: f64) -> String {
        if !self.show_timer {
            return String::new();
        }

        // Fixed-width field so the bar does not resize as digits change.
        let text = format!(" {:>4}", format_remaining(remaining));
        self.timer_style.render(&text)
    }
}

impl BubbleTeaModel for Model {
    /// Creates a countdown bar with default settings for standalone use.
    ///
    /// Ten seconds, not running; most applications will construct with
    /// [`new`] and options instead.
    fn init() -> (Self, Option<Cmd>) {
        let model = new(&[]);
        let cmd = model.init();
        (model, cmd)
    }

    /// Forwards messages to [`Model::update`].
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    /// Renders via [`Model::view`].
    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// Creates a countdown bar with default settings.
    ///
    /// Equivalent to `new(&[])`: a 10 second countdown, not running, with
    /// both regions visible.
    fn default() -> Self {
        new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(m: &Model, at: Instant) -> Msg {
        Box::new(FrameMsg {
            id: m.id,
            tag: m.tag,
            at,
        })
    }

    #[test]
    fn test_defaults() {
        let m = new(&[]);

        assert_eq!(m.total_seconds(), 10.0);
        assert_eq!(m.remaining(), 10.0);
        assert!(!m.is_running());
        assert!(m.show_timer);
        assert!(m.show_bar);
        assert_eq!(m.width, DEFAULT_WIDTH);
        assert!(m.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        let m1 = new(&[]);
        let m2 = new(&[]);

        assert_ne!(m1.id(), m2.id());
    }

    #[test]
    fn test_options() {
        let m = new(&[
            with_duration(30.0),
            with_width(20),
            with_fill_characters('=', '-'),
            with_fill_color("#00FF00".to_string()),
            with_empty_color("#333333".to_string()),
            without_timer(),
            without_bar(),
        ]);

        assert_eq!(m.total_seconds(), 30.0);
        assert_eq!(m.remaining(), 30.0);
        assert_eq!(m.width, 20);
        assert_eq!(m.full, '=');
        assert_eq!(m.empty, '-');
        assert_eq!(m.full_color, "#00FF00");
        assert_eq!(m.empty_color, "#333333");
        assert!(!m.show_timer);
        assert!(!m.show_bar);
    }

    #[test]
    fn test_with_running_init() {
        let idle = new(&[]);
        assert!(idle.init().is_none());

        let running = new(&[with_running()]);
        assert!(running.is_running());
        assert!(running.init().is_some());
    }

    #[test]
    fn test_format_remaining_integer_range() {
        // At ten seconds and above: floored integer, no decimal point.
        assert_eq!(format_remaining(10.0), "10");
        assert_eq!(format_remaining(10.9), "10");
        assert_eq!(format_remaining(59.9), "59");
        assert_eq!(format_remaining(100.0), "100");
    }

    #[test]
    fn test_format_remaining_decimal_range() {
        // Below ten seconds: floored to one decimal, never rounded up.
        assert_eq!(format_remaining(9.99), "9.9");
        assert_eq!(format_remaining(9.96), "9.9");
        assert_eq!(format_remaining(6.0), "6.0");
        assert_eq!(format_remaining(0.25), "0.2");
        assert_eq!(format_remaining(0.0), "0.0");
    }

    #[test]
    fn test_percent_zero_duration() {
        // A zero duration must not divide by zero.
        let m = new(&[with_duration(0.0)]);
        assert_eq!(m.percent(), 0.0);

        // And rendering it must not panic either.
        let _ = m.view();
    }

    #[test]
    fn test_percent_unclamped() {
        let mut m = new(&[with_duration(10.0)]);
        m.set_remaining(42.0);
        assert_eq!(m.percent(), 4.2);

        // Rendering clamps the fill to the bar width.
        let view = m.view();
        assert_eq!(lipgloss::width_visible(&view) as i32, m.width);
    }

    #[test]
    fn test_start_stop() {
        let mut m = new(&[with_duration(30.0)]);

        let cmd = m.start();
        assert!(m.is_running());
        assert!(cmd.is_some());

        // Starting while running is a no-op: the live chain continues.
        assert!(m.start().is_none());

        m.stop();
        assert!(!m.is_running());
        assert_eq!(m.remaining(), 30.0);

        // Idempotent.
        m.stop();
        assert!(!m.is_running());
    }

    #[test]
    fn test_first_frame_records_timestamp_only() {
        let mut m = new(&[with_duration(30.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        let cmd = m.update(frame(&m, t0));

        assert!(cmd.is_some());
        assert_eq!(m.remaining(), 30.0); // delta = 0 on the first frame
    }

    #[test]
    fn test_ticks_advance_by_wall_clock_delta() {
        // totalSeconds=30, ticks summing to 5 elapsed seconds.
        let mut m = new(&[with_duration(30.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        assert!(m.update(frame(&m, t0)).is_some());
        assert!(m.update(frame(&m, t0 + Duration::from_secs(2))).is_some());
        assert!(m.update(frame(&m, t0 + Duration::from_secs(5))).is_some());

        assert!((m.remaining() - 25.0).abs() < 1e-9);
        assert!((m.percent() * 100.0 - 83.333).abs() < 0.01);
        assert!(m.is_running());
    }

    #[test]
    fn test_natural_expiry() {
        // totalSeconds=5, ticks summing to 6 elapsed seconds.
        let mut m = new(&[with_duration(5.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        assert!(m.update(frame(&m, t0)).is_some());
        assert!(m.update(frame(&m, t0 + Duration::from_secs(3))).is_some());

        // This frame drives remaining below zero: clamp, stop, announce.
        let old_tag = m.tag;
        let ended = m.update(frame(&m, t0 + Duration::from_secs(6)));
        assert!(ended.is_some());
        assert_eq!(m.remaining(), 0.0);
        assert!(!m.is_running());

        // The chain is dead: a straggler frame from it is rejected.
        let straggler = Box::new(FrameMsg {
            id: m.id,
            tag: old_tag,
            at: t0 + Duration::from_secs(7),
        }) as Msg;
        assert!(m.update(straggler).is_none());
        assert_eq!(m.remaining(), 0.0);
    }

    #[test]
    fn test_exact_zero_keeps_running() {
        // Landing exactly on zero is not yet an expiry; the next frame is.
        let mut m = new(&[with_duration(5.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        assert!(m.update(frame(&m, t0)).is_some());
        assert!(m.update(frame(&m, t0 + Duration::from_secs(5))).is_some());

        assert_eq!(m.remaining(), 0.0);
        assert!(m.is_running());

        assert!(m.update(frame(&m, t0 + Duration::from_millis(5100))).is_some());
        assert!(!m.is_running());
    }

    #[test]
    fn test_end_from_running() {
        let mut m = new(&[with_duration(30.0)]);
        let _ = m.start();

        let _ended = m.end();
        assert_eq!(m.remaining(), 0.0);
        assert!(!m.is_running());
    }

    #[test]
    fn test_end_announces_unconditionally() {
        // end() on an idle bar already at zero still emits the notification.
        let mut m = new(&[with_duration(30.0)]);

        let _first = m.end();
        assert_eq!(m.remaining(), 0.0);

        let _second = m.end(); // still produces an ended command
        assert_eq!(m.remaining(), 0.0);
        assert!(!m.is_running());
    }

    #[test]
    fn test_stop_releases_pending_frame() {
        let mut m = new(&[with_duration(30.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        assert!(m.update(frame(&m, t0)).is_some());

        let live_tag = m.tag;
        m.stop();

        // The frame scheduled before the stop now carries a stale tag.
        let stale = Box::new(FrameMsg {
            id: m.id,
            tag: live_tag,
            at: t0 + Duration::from_secs(1),
        }) as Msg;
        assert!(m.update(stale).is_none());
        assert_eq!(m.remaining(), 30.0);
    }

    #[test]
    fn test_wrong_id_rejected() {
        let mut m = new(&[with_duration(30.0)]);
        let _ = m.start();

        let wrong = Box::new(FrameMsg {
            id: m.id + 999,
            tag: m.tag,
            at: Instant::now(),
        }) as Msg;
        assert!(m.update(wrong).is_none());
        assert_eq!(m.remaining(), 30.0);
    }

    #[test]
    fn test_stop_start_does_not_double_count() {
        let mut m = new(&[with_duration(30.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        assert!(m.update(frame(&m, t0)).is_some());
        assert!(m.update(frame(&m, t0 + Duration::from_secs(2))).is_some());
        m.stop();

        // A long pause, then resume: the first frame after the restart only
        // records its timestamp.
        let _ = m.start();
        assert!(m.update(frame(&m, t0 + Duration::from_secs(60))).is_some());
        assert!((m.remaining() - 28.0).abs() < 1e-9);

        assert!(m.update(frame(&m, t0 + Duration::from_secs(61))).is_some());
        assert!((m.remaining() - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_total_seconds_resets_remaining() {
        let mut m = new(&[with_duration(10.0)]);
        m.set_remaining(3.0);

        m.set_total_seconds(20.0);
        assert_eq!(m.total_seconds(), 20.0);
        assert_eq!(m.remaining(), 20.0);
        assert_eq!(m.percent(), 1.0);
    }

    #[test]
    fn test_reset_while_idle() {
        let mut m = new(&[with_duration(10.0)]);
        m.set_remaining(2.5);

        m.reset();
        assert_eq!(m.remaining(), 10.0);
        assert!(!m.is_running());
    }

    #[test]
    fn test_reset_while_running_keeps_ticking() {
        // reset() reuses the duration-changed path: a mid-run countdown is
        // not paused, and the live chain continues from the same timestamp.
        let mut m = new(&[with_duration(10.0)]);
        let _ = m.start();

        let t0 = Instant::now();
        assert!(m.update(frame(&m, t0)).is_some());
        assert!(m.update(frame(&m, t0 + Duration::from_secs(2))).is_some());
        assert!((m.remaining() - 8.0).abs() < 1e-9);

        m.reset();
        assert!(m.is_running());
        assert_eq!(m.remaining(), 10.0);

        assert!(m.update(frame(&m, t0 + Duration::from_secs(3))).is_some());
        assert!((m.remaining() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_toggle() {
        let mut m = new(&[with_duration(30.0)]);

        let cmd = m.toggle();
        assert!(m.is_running());
        assert!(cmd.is_some());

        assert!(m.toggle().is_none());
        assert!(!m.is_running());
    }

    #[test]
    fn test_negative_duration_propagates() {
        // Malformed input is not rejected; it flows into the math.
        let m = new(&[with_duration(-5.0)]);
        assert_eq!(m.total_seconds(), -5.0);
        assert_eq!(m.remaining(), -5.0);

        let _ = m.view();
        let _ = m.view_as(-5.0);
    }

    #[test]
    fn test_view_width() {
        let m = new(&[with_duration(30.0)]);
        let view = m.view();

        // Bar plus readout fill the configured width exactly.
        assert_eq!(lipgloss::width_visible(&view) as i32, m.width);
    }

    #[test]
    fn test_view_visibility_toggles() {
        let bar_only = new(&[with_duration(30.0), without_timer()]);
        let view = bar_only.view();
        assert_eq!(lipgloss::width_visible(&view) as i32, bar_only.width);
        assert!(view.contains('█'));

        let readout_only = new(&[with_duration(30.0), without_bar()]);
        let view = readout_only.view();
        assert!(!view.contains('█'));
        assert!(!view.contains('░'));

        let hidden = new(&[with_duration(30.0), without_timer(), without_bar()]);
        assert_eq!(hidden.view(), "");
    }

    #[test]
    fn test_view_decimal_readout() {
        let mut m = new(&[with_duration(30.0)]);
        m.set_remaining(9.99);

        assert!(m.view().contains("9.9"));
    }

    #[test]
    fn test_view_as_fill_levels() {
        let m = new(&[with_duration(30.0), without_timer()]);

        let full = m.view_as(30.0);
        assert!(!full.contains('░'));

        let empty = m.view_as(0.0);
        assert!(!empty.contains('█'));
    }

    #[test]
    fn test_default_model() {
        let m = Model::default();
        assert_eq!(m.total_seconds(), 10.0);
        assert!(!m.is_running());
    }

    #[test]
    fn test_ended_msg_semantics() {
        let ended = EndedMsg { id: 123 };
        assert_eq!(ended.id, 123);
    }
}
