//! Iterator adapters for automatic progress tracking.
//!
//! [`ProgressIteratorExt`] adds helper methods to any [`Iterator`] so a bar can be attached to
//! a loop with a single call. Every yielded item adds one to the bar.
//!
//! ```
//! use fill_bar::{ProgressBarBuilder, ProgressIteratorExt};
//!
//! let bar = ProgressBarBuilder::new(3u64).with_writer(Vec::new()).build();
//! let sum: i32 = [1, 2, 3].into_iter().progress_with(bar.clone()).sum();
//!
//! assert_eq!(sum, 6);
//! assert!(bar.is_finished());
//! ```

use crate::bar::ProgressBar;

/// An iterator adapter that increments a [`ProgressBar`] for every item it yields.
pub struct ProgressIter<I> {
    iter: I,
    bar: ProgressBar,
}

impl<I> ProgressIter<I> {
    /// Creates a new `ProgressIter`.
    ///
    /// Usually constructed via [`ProgressIteratorExt`] methods.
    pub const fn new(iter: I, bar: ProgressBar) -> Self {
        Self { iter, bar }
    }

    /// Returns the bar being driven.
    pub const fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl<I: Iterator> Iterator for ProgressIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;

        // The item is still handed out if it cannot be counted.
        if let Err(err) = self.bar.add(1u64) {
            log::warn!("progress not updated: {err}");
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Extension trait to attach a [`ProgressBar`] to any Iterator.
pub trait ProgressIteratorExt: Sized {
    /// Wraps the iterator in a new [`ProgressBar`] drawing to standard output.
    ///
    /// The total is taken from an exact [`Iterator::size_hint`], or 0 when the length is
    /// unknown (in which case every increment is rejected and logged).
    fn progress(self) -> ProgressIter<Self>;

    /// Wraps the iterator using an existing [`ProgressBar`].
    fn progress_with(self, bar: ProgressBar) -> ProgressIter<Self>;
}

impl<I: Iterator> ProgressIteratorExt for I {
    fn progress(self) -> ProgressIter<Self> {
        let total = match self.size_hint() {
            (lower, Some(upper)) if lower == upper => upper as u64,
            _ => 0,
        };
        ProgressIter::new(self, ProgressBar::new(total))
    }

    fn progress_with(self, bar: ProgressBar) -> ProgressIter<Self> {
        ProgressIter::new(self, bar)
    }
}
