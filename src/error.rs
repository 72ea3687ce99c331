//! Error types returned by [`ProgressBar::add`](crate::ProgressBar::add).

use std::io;

/// Alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reasons an increment can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bar was created with a total of zero, so no percentage can be derived.
    #[error("the total must be greater than 0")]
    InvalidTotal,

    /// Adding `amount` to `current` would move the counter past `total`.
    ///
    /// The counter is left at `current`.
    #[error("current exceeds total: {current} + {amount} > {total}")]
    CounterExceedsTotal {
        /// Counter value before the rejected increment.
        current: u64,
        /// The rejected amount.
        amount: u64,
        /// The bar's total.
        total: u64,
    },

    /// Writing the line to the render sink failed.
    ///
    /// The increment itself has already been committed when this is returned.
    #[error("failed to render progress line")]
    Io(#[from] io::Error),
}
