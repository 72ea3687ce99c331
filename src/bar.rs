//! The [`ProgressBar`] handle and its render state machine.
//!
//! A bar is a monotonic counter with a cached display projection. Every successful
//! [`add`](ProgressBar::add) recomputes the percentage, grows the accumulated fill by the
//! number of cells the percentage gained, and redraws one line on the render sink.
//!
//! # Locking
//!
//! All mutable state (counter, cached percent, fill, theme and the sink itself) lives behind a
//! single [`Mutex`](parking_lot::Mutex). An increment holds it for its whole duration,
//! including the write, so concurrent increments are serialised and lines never interleave.
//! Theme changes take the same lock.

use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use compact_str::CompactString;
use parking_lot::Mutex;
use web_time::Instant;

use crate::{
    builder::ProgressBarBuilder,
    error::{Error, Result},
    render::Line,
    theme::{Theme, ThemeOverrides},
};

/// The destination lines are written to.
pub type Sink = Box<dyn Write + Send>;

/// A thread-safe, cloneable single-line progress bar.
///
/// Cloning is cheap (Arc bump); every clone drives the same counter and output line, so a
/// clone can be handed to each worker thread.
#[derive(Clone)]
pub struct ProgressBar {
    pub(crate) total: u64,
    pub(crate) start: Instant,
    pub(crate) inner: Arc<Mutex<Inner>>,
}

pub(crate) struct Inner {
    pub(crate) state: State,
    pub(crate) theme: Theme,
    pub(crate) sink: Sink,
}

/// Counter plus the values cached from the last render.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) current: u64,
    pub(crate) percent: f64,
    pub(crate) fill_width: usize,
    pub(crate) fill: CompactString,
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ProgressBar")
            .field("total", &self.total)
            .field("current", &inner.state.current)
            .field("theme", &inner.theme)
            .finish_non_exhaustive()
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(current: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * (current as f64 / total as f64)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn fill_width_of(percent: f64, width: usize) -> usize {
    let cells = (percent / 100.0 * width as f64) as usize;
    cells.min(width)
}

#[allow(clippy::cast_precision_loss)]
fn eta_of(elapsed: Duration, current: u64, total: u64) -> Option<Duration> {
    if current == 0 {
        return None;
    }
    let remaining = total.saturating_sub(current) as f64;
    let secs = elapsed.as_secs_f64() / current as f64 * remaining;
    Duration::try_from_secs_f64(secs).ok()
}

impl ProgressBar {
    /// Creates a bar counting up to `total`, drawing to standard output with the default theme.
    ///
    /// A `total` of zero is accepted here; [`add`](Self::add) rejects it.
    #[must_use]
    pub fn new(total: impl Into<u64>) -> Self {
        ProgressBarBuilder::new(total).build()
    }

    /// Convenience factory, identical to [`new`](Self::new).
    #[must_use]
    pub fn default_bar(total: impl Into<u64>) -> Self {
        Self::new(total)
    }

    pub(crate) fn from_parts(total: u64, start: Instant, theme: Theme, sink: Sink) -> Self {
        Self {
            total,
            start,
            inner: Arc::new(Mutex::new(Inner {
                state: State::default(),
                theme,
                sink,
            })),
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Applies `overrides` to the theme. Unset, empty and zero fields keep their value.
    ///
    /// When the glyph or the width changes, the accumulated fill is redrawn with the new
    /// theme at the current percentage. Nothing is written to the sink until the next
    /// [`add`](Self::add).
    pub fn set_theme(&self, overrides: ThemeOverrides) {
        let mut guard = self.inner.lock();
        let Inner { state, theme, .. } = &mut *guard;

        let before = theme.clone();
        theme.apply(overrides);

        if theme.width() != before.width() || theme.fill() != before.fill() {
            state.fill_width = fill_width_of(state.percent, theme.width());
            state.fill = theme.fill().repeat(state.fill_width).into();
        }
    }

    /// Returns a copy of the current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.inner.lock().theme.clone()
    }

    // ========================================================================
    // Increment
    // ========================================================================

    /// Adds `amount` to the counter and redraws the line.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidTotal`] if the bar's total is zero.
    /// * [`Error::CounterExceedsTotal`] if the counter would pass the total.
    /// * [`Error::Io`] if the sink rejected the write. The increment is kept.
    ///
    /// The first two leave the bar untouched.
    #[allow(clippy::float_cmp)]
    pub fn add(&self, amount: impl Into<u64>) -> Result<()> {
        let amount = amount.into();
        let mut guard = self.inner.lock();

        if self.total == 0 {
            return Err(Error::InvalidTotal);
        }

        let current = guard.state.current;
        let next = match current.checked_add(amount) {
            Some(next) if next <= self.total => next,
            _ => {
                return Err(Error::CounterExceedsTotal {
                    current,
                    amount,
                    total: self.total,
                });
            }
        };

        let Inner { state, theme, sink } = &mut *guard;

        let last_percent = state.percent;
        let last_fill_width = state.fill_width;

        state.current = next;
        state.percent = percent_of(next, self.total);
        state.fill_width = fill_width_of(state.percent, theme.width());

        if state.percent != last_percent {
            let gained = state.fill_width.saturating_sub(last_fill_width);
            for _ in 0..gained {
                state.fill.push_str(theme.fill());
            }
        }

        let elapsed = self.start.elapsed();
        let line = Line {
            theme,
            fill: &state.fill,
            percent: state.percent,
            current: state.current,
            total: self.total,
            elapsed,
            eta: eta_of(elapsed, state.current, self.total),
        };

        write_line(sink, &line.render())?;
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the target count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the current count.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.inner.lock().state.current
    }

    /// Returns the percentage computed by the last successful increment.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.inner.lock().state.percent
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn fill_width(&self) -> usize {
        self.inner.lock().state.fill_width
    }

    /// Returns the accumulated fill glyphs.
    #[must_use]
    pub fn fill(&self) -> CompactString {
        self.inner.lock().state.fill.clone()
    }

    /// Returns the time since the bar was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns `true` once the counter has reached a non-zero total.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total != 0 && self.current() == self.total
    }

    /// Creates a consistent snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.into()
    }
}

fn write_line(sink: &mut Sink, line: &str) -> io::Result<()> {
    sink.write_all(line.as_bytes())?;
    sink.flush()
}

/// A plain-data snapshot of a [`ProgressBar`] at a specific point in time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, PartialEq)))]
pub struct ProgressSnapshot {
    total: u64,
    current: u64,
    percent: f64,
    fill_width: usize,
    elapsed: Duration,
}

impl From<&ProgressBar> for ProgressSnapshot {
    fn from(bar: &ProgressBar) -> Self {
        let inner = bar.inner.lock();
        Self {
            total: bar.total,
            current: inner.state.current,
            percent: inner.state.percent,
            fill_width: inner.state.fill_width,
            elapsed: bar.start.elapsed(),
        }
    }
}

impl ProgressSnapshot {
    /// Returns the target count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the current count.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.current
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub const fn fill_width(&self) -> usize {
        self.fill_width
    }

    /// Returns the time elapsed when the snapshot was taken.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Estimates the time remaining by extrapolating the average rate since start.
    ///
    /// Returns `None` while nothing has been counted.
    #[must_use]
    pub fn eta(&self) -> Option<Duration> {
        eta_of(self.elapsed, self.current, self.total)
    }
}
