//! Fluent interface for constructing [`ProgressBar`] instances.
//!
//! [`ProgressBar::new`] draws to standard output with the default theme and starts the clock
//! immediately. The [`ProgressBarBuilder`] covers the remaining cases:
//!
//! * **Render sink:** Any `Write + Send` can receive the lines, e.g. standard error, a log
//!   file, or an in-memory buffer in tests.
//! * **Theme:** A full [`Theme`] or a partial [`ThemeOverrides`] can be applied up front.
//! * **Start time:** The clock can be started at an explicit instant, useful when the work
//!   began before the bar was created.
//!
//! ```
//! use fill_bar::{ProgressBarBuilder, ThemeOverrides};
//!
//! let bar = ProgressBarBuilder::new(10u64)
//!     .with_overrides(ThemeOverrides::new().fill("#").width(20))
//!     .with_writer(Vec::new())
//!     .build();
//!
//! bar.add(5u64).unwrap();
//! assert_eq!(bar.fill(), "##########");
//! ```

use std::io::{self, Write};

use web_time::Instant;

use crate::{
    bar::{ProgressBar, Sink},
    theme::{Theme, ThemeOverrides},
};

/// A builder for [`ProgressBar`] instances.
pub struct ProgressBarBuilder {
    total: u64,
    theme: Theme,
    start: Option<Instant>,
    sink: Option<Sink>,
}

impl ProgressBarBuilder {
    /// Starts building a bar counting up to `total`.
    #[must_use]
    pub fn new(total: impl Into<u64>) -> Self {
        Self {
            total: total.into(),
            theme: Theme::default(),
            start: None,
            sink: None,
        }
    }

    /// Replaces the whole theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Applies a partial theme update on top of the current one.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ThemeOverrides) -> Self {
        self.theme.apply(overrides);
        self
    }

    /// Sends rendered lines to `writer` instead of standard output.
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    /// Sets the start time explicitly.
    #[must_use]
    pub const fn with_start_time(mut self, start: Instant) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the start time to `Instant::now()`.
    #[must_use]
    pub fn with_start_time_now(self) -> Self {
        self.with_start_time(Instant::now())
    }

    /// Consumes the builder and returns the constructed [`ProgressBar`].
    ///
    /// Without an explicit start time the clock starts here.
    #[must_use]
    pub fn build(self) -> ProgressBar {
        ProgressBar::from_parts(
            self.total,
            self.start.unwrap_or_else(Instant::now),
            self.theme,
            self.sink.unwrap_or_else(|| Box::new(io::stdout())),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use web_time::Instant;

    use super::ProgressBarBuilder;
    use crate::{
        test_util::SharedBuf,
        theme::{Theme, ThemeOverrides},
    };

    /// Builder Defaults
    /// A bare builder gives the default theme and an empty counter.
    #[test]
    fn test_defaults() {
        let bar = ProgressBarBuilder::new(100u64).build();
        assert_eq!(bar.total(), 100);
        assert_eq!(bar.current(), 0);
        assert_eq!(bar.theme(), Theme::default());
    }

    /// Theme Composition
    /// Overrides are applied on top of an explicit theme.
    #[test]
    fn test_theme_and_overrides_compose() {
        let base = Theme::default().with(ThemeOverrides::new().open("<").close(">"));
        let bar = ProgressBarBuilder::new(2u64)
            .with_theme(base)
            .with_overrides(ThemeOverrides::new().width(4).fill("*"))
            .with_writer(Vec::new())
            .build();

        let theme = bar.theme();
        assert_eq!(theme.open(), "<");
        assert_eq!(theme.close(), ">");
        assert_eq!(theme.width(), 4);
        assert_eq!(theme.fill(), "*");
    }

    /// Explicit Start Time
    /// A start time in the past shows up in elapsed time and the rendered line.
    #[test]
    fn test_explicit_start_time() {
        let Some(start) = Instant::now().checked_sub(Duration::from_secs(65)) else {
            return;
        };
        let buf = SharedBuf::default();
        let bar = ProgressBarBuilder::new(2u64)
            .with_start_time(start)
            .with_writer(buf.clone())
            .build();

        assert!(bar.elapsed() >= Duration::from_secs(65));

        bar.add(1u64).unwrap();
        assert!(buf.contents().contains("(1m5s-1m5s)"));
    }
}
