//! Line formatting.
//!
//! Everything here is pure: the bar hands over the values it has just computed and gets back
//! the exact text to write. The line starts with a carriage return so each render overwrites
//! the previous one, and carries no trailing newline.

use std::{fmt::Write as _, time::Duration};

use compact_str::CompactString;

use crate::theme::Theme;

/// Placeholder written when no ETA can be estimated yet.
pub const UNKNOWN_ETA: &str = "?";

/// The values shown on one rendered line.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    /// Theme providing the delimiters and width.
    pub theme: &'a Theme,
    /// Accumulated fill glyphs.
    pub fill: &'a str,
    /// Completion percentage, 0 to 100.
    pub percent: f64,
    /// Current count.
    pub current: u64,
    /// Total count.
    pub total: u64,
    /// Time since the bar started.
    pub elapsed: Duration,
    /// Estimated time remaining, if known.
    pub eta: Option<Duration>,
}

impl Line<'_> {
    /// Renders the line, e.g. `\r[████      ] 40%   40/100 (2s-3s)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn render(&self) -> String {
        let width = self.theme.width();
        let mut out = String::with_capacity(width * 3 + 32);

        out.push('\r');
        out.push_str(self.theme.open());
        let mut cells = 0;
        for c in self.fill.chars().take(width) {
            out.push(c);
            cells += 1;
        }
        out.extend(std::iter::repeat_n(' ', width - cells));
        out.push_str(self.theme.close());

        let eta = self
            .eta
            .map_or_else(|| CompactString::const_new(UNKNOWN_ETA), format_duration);

        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{:>3}% {:>4}/{} ({}-{})",
            self.percent as u64,
            self.current,
            self.total,
            format_duration(self.elapsed),
            eta,
        );
        out
    }
}

/// Rounds `d` to the nearest whole second (halves round up).
#[must_use]
pub fn round_to_secs(d: Duration) -> Duration {
    let secs = d.as_secs() + u64::from(d.subsec_millis() >= 500);
    Duration::from_secs(secs)
}

/// Formats a duration, rounded to whole seconds, as `0s`, `42s`, `1m5s` or `2h0m3s`.
#[must_use]
pub fn format_duration(d: Duration) -> CompactString {
    let total = round_to_secs(d).as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);

    let mut out = CompactString::default();
    // Writing into a CompactString cannot fail.
    let _ = if hours > 0 {
        write!(out, "{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        write!(out, "{minutes}m{seconds}s")
    } else {
        write!(out, "{seconds}s")
    };
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Line, format_duration, round_to_secs};
    use crate::theme::{Theme, ThemeOverrides};

    /// Duration Text
    /// Durations round to whole seconds and use the compact h/m/s form.
    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(499)), "0s");
        assert_eq!(format_duration(Duration::from_millis(500)), "1s");
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m5s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_secs(7203)), "2h0m3s");
    }

    /// Rounding
    /// Halves round up to the next second.
    #[test]
    fn test_round_to_secs() {
        assert_eq!(
            round_to_secs(Duration::from_millis(1_499)),
            Duration::from_secs(1)
        );
        assert_eq!(
            round_to_secs(Duration::from_millis(1_500)),
            Duration::from_secs(2)
        );
    }

    /// Padding
    /// Fill is padded with spaces to the theme width, numbers are right aligned.
    #[test]
    fn test_render_padding() {
        let theme = Theme::default().with(ThemeOverrides::new().width(10));
        let line = Line {
            theme: &theme,
            fill: "████",
            percent: 40.0,
            current: 40,
            total: 100,
            elapsed: Duration::from_secs(2),
            eta: Some(Duration::from_millis(3_200)),
        };

        assert_eq!(line.render(), "\r[████      ] 40%   40/100 (2s-3s)");
    }

    /// Full and Empty Lines
    /// A complete bar and a bar with no ETA yet.
    #[test]
    fn test_render_full_and_unknown_eta() {
        let theme = Theme::default().with(ThemeOverrides::new().width(4).fill("#"));
        let full = Line {
            theme: &theme,
            fill: "####",
            percent: 100.0,
            current: 12_345,
            total: 12_345,
            elapsed: Duration::from_secs(90),
            eta: Some(Duration::ZERO),
        };
        assert_eq!(full.render(), "\r[####]100% 12345/12345 (1m30s-0s)");

        let empty = Line {
            fill: "",
            percent: 0.0,
            current: 0,
            total: 10,
            elapsed: Duration::ZERO,
            eta: None,
            ..full
        };
        assert_eq!(empty.render(), "\r[    ]  0%    0/10 (0s-?)");
    }

    /// Truncation
    /// A fill longer than the width is cut at the width.
    #[test]
    fn test_render_truncates_fill() {
        let theme = Theme::default().with(ThemeOverrides::new().width(3));
        let line = Line {
            theme: &theme,
            fill: "=>=>",
            percent: 100.0,
            current: 1,
            total: 1,
            elapsed: Duration::ZERO,
            eta: Some(Duration::ZERO),
        };
        assert_eq!(line.render(), "\r[=>=]100%    1/1 (0s-0s)");
    }
}
