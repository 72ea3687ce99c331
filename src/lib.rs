//! # `fill_bar`
//!
//! A thread-safe, single-line terminal progress bar.
//!
//! A [`ProgressBar`] counts up to a fixed total. Each successful [`ProgressBar::add`] grows the
//! filled part of the bar and redraws one carriage-return-prefixed line:
//!
//! ```text
//! [████████████                                      ] 25%   50/200 (3s-9s)
//! ```
//!
//! It is designed to be:
//!
//! * **Shared**: Handles are cheap to clone ([`Arc`](std::sync::Arc)-based); parallel workers
//!   can each report partial progress on their own clone.
//! * **Serialised**: One lock covers the counter, the cached render state and the output, so
//!   increments never race and lines never interleave.
//! * **Strict**: Increments that would pass the total are rejected without touching the bar.
//!
//! ## Modules
//!
//! * [`bar`]: The [`ProgressBar`] handle, its render state machine and [`ProgressSnapshot`].
//! * [`builder`]: Fluent construction with a custom sink, theme or start time.
//! * [`error`]: The [`Error`] returned by rejected increments.
//! * [`io`]: [`std::io::Read`] and [`std::io::Write`] wrappers that count bytes.
//! * [`iter`]: Extension trait counting iterator items.
//! * [`render`]: Line and duration formatting.
//! * [`theme`]: Glyphs, delimiters and width.
//!
//! ## Example
//!
//! ```
//! use fill_bar::{Error, ProgressBarBuilder};
//!
//! let bar = ProgressBarBuilder::new(200u64).with_writer(Vec::new()).build();
//!
//! bar.add(50u64)?;
//! assert_eq!(bar.fill_width(), 12);
//!
//! bar.add(150u64)?;
//! assert!(bar.is_finished());
//!
//! assert!(matches!(bar.add(1u64), Err(Error::CounterExceedsTotal { .. })));
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bar;
pub mod builder;
pub mod error;
pub mod io;
pub mod iter;
pub mod render;
pub mod theme;

#[cfg(test)]
mod test_util;

pub use bar::{ProgressBar, ProgressSnapshot};
pub use builder::ProgressBarBuilder;
pub use error::{Error, Result};
pub use iter::{ProgressIter, ProgressIteratorExt};
pub use theme::{Theme, ThemeOverrides};
