//! Visual configuration of a [`ProgressBar`](crate::ProgressBar).
//!
//! A [`Theme`] holds the complete set of glyphs and the bar width. It is changed through
//! [`ThemeOverrides`], a partial record where every field is optional: fields left as `None`,
//! or set to an empty string / zero width, keep the value already in the theme.

use compact_str::CompactString;

/// Default glyph used for filled cells.
pub const DEFAULT_FILL: &str = "█";
/// Default opening delimiter.
pub const DEFAULT_OPEN: &str = "[";
/// Default closing delimiter.
pub const DEFAULT_CLOSE: &str = "]";
/// Default number of cells between the delimiters.
pub const DEFAULT_WIDTH: usize = 50;

/// The glyphs and width used to draw a bar.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, Eq, PartialEq)))]
pub struct Theme {
    fill: CompactString,
    open: CompactString,
    close: CompactString,
    width: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fill: CompactString::const_new(DEFAULT_FILL),
            open: CompactString::const_new(DEFAULT_OPEN),
            close: CompactString::const_new(DEFAULT_CLOSE),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Theme {
    /// Returns the glyph repeated for every filled cell.
    ///
    /// One glyph occupies one cell, so it should be a single character. Longer glyphs are
    /// drawn in full and the fill is then cut at [`width`](Self::width) characters, which
    /// makes the bar look full early.
    #[must_use]
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Returns the opening delimiter.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Returns the closing delimiter.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns the number of cells between the delimiters.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Applies `overrides` field by field.
    ///
    /// Unset, empty and zero fields are ignored.
    pub fn apply(&mut self, overrides: ThemeOverrides) {
        let ThemeOverrides {
            fill,
            open,
            close,
            width,
        } = overrides;

        if let Some(fill) = fill.filter(|s| !s.is_empty()) {
            self.fill = fill;
        }
        if let Some(open) = open.filter(|s| !s.is_empty()) {
            self.open = open;
        }
        if let Some(close) = close.filter(|s| !s.is_empty()) {
            self.close = close;
        }
        if let Some(width) = width.filter(|&w| w != 0) {
            self.width = width;
        }
    }

    /// Returns a copy of this theme with `overrides` applied.
    #[must_use]
    pub fn with(mut self, overrides: ThemeOverrides) -> Self {
        self.apply(overrides);
        self
    }
}

/// A partial update for a [`Theme`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeOverrides {
    /// Replacement fill glyph, a single character per cell.
    pub fill: Option<CompactString>,
    /// Replacement opening delimiter.
    pub open: Option<CompactString>,
    /// Replacement closing delimiter.
    pub close: Option<CompactString>,
    /// Replacement width.
    pub width: Option<usize>,
}

impl ThemeOverrides {
    /// An override that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill glyph. See [`Theme::fill`] for why it should be one character.
    #[must_use]
    pub fn fill(mut self, fill: impl Into<CompactString>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the opening delimiter.
    #[must_use]
    pub fn open(mut self, open: impl Into<CompactString>) -> Self {
        self.open = Some(open.into());
        self
    }

    /// Sets the closing delimiter.
    #[must_use]
    pub fn close(mut self, close: impl Into<CompactString>) -> Self {
        self.close = Some(close.into());
        self
    }

    /// Sets the width.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeOverrides};

    /// Theme Defaults
    /// Solid block glyph, square brackets, 50 cells.
    #[test]
    fn test_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.fill(), "█");
        assert_eq!(theme.open(), "[");
        assert_eq!(theme.close(), "]");
        assert_eq!(theme.width(), 50);
    }

    /// Empty Overrides
    /// Empty and zero values never reset a field.
    #[test]
    fn test_empty_overrides_are_ignored() {
        let mut theme = Theme::default();
        theme.apply(ThemeOverrides::new());
        assert_eq!(theme, Theme::default());

        theme.apply(ThemeOverrides::new().fill("").open("").close("").width(0));
        assert_eq!(theme, Theme::default());
    }

    /// Single Field
    /// Overriding the width leaves every other field alone.
    #[test]
    fn test_single_field_override() {
        let theme = Theme::default().with(ThemeOverrides::new().width(20));
        assert_eq!(theme.width(), 20);
        assert_eq!(theme.fill(), "█");
        assert_eq!(theme.open(), "[");
        assert_eq!(theme.close(), "]");
    }

    /// All Fields
    /// Every field can be replaced at once.
    #[test]
    fn test_all_fields_override() {
        let theme = Theme::default().with(
            ThemeOverrides::new()
                .fill("#")
                .open("<")
                .close(">")
                .width(10),
        );
        assert_eq!(theme.fill(), "#");
        assert_eq!(theme.open(), "<");
        assert_eq!(theme.close(), ">");
        assert_eq!(theme.width(), 10);
    }
}
