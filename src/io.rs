//! I/O wrappers for tracking data transfer.
//!
//! [`ProgressReader`] and [`ProgressWriter`] wrap any [`Read`] or [`Write`] and add every byte
//! that passes through to a [`ProgressBar`], e.g. while copying a file of known size.
//!
//! A byte count the bar rejects (the stream turned out longer than the total) is logged and
//! dropped. The transfer itself still succeeds, so an `Err` from these wrappers always comes
//! from the inner stream.

use std::io::{self, Read, Write};

use crate::bar::ProgressBar;

fn track(bar: &ProgressBar, n: usize) {
    if let Err(err) = bar.add(n as u64) {
        log::warn!("progress not updated for {n} bytes: {err}");
    }
}

/// A wrapper around [`Read`] that increments a [`ProgressBar`] by the bytes read.
pub struct ProgressReader<R> {
    inner: R,
    bar: ProgressBar,
}

impl<R> ProgressReader<R> {
    /// Creates a new `ProgressReader` wrapping `inner`.
    pub const fn new(inner: R, bar: ProgressBar) -> Self {
        Self { inner, bar }
    }

    /// Unwraps this `ProgressReader`, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            track(&self.bar, n);
        }
        Ok(n)
    }
}

/// A wrapper around [`Write`] that increments a [`ProgressBar`] by the bytes written.
pub struct ProgressWriter<W> {
    inner: W,
    bar: ProgressBar,
}

impl<W> ProgressWriter<W> {
    /// Creates a new `ProgressWriter` wrapping `inner`.
    pub const fn new(inner: W, bar: ProgressBar) -> Self {
        Self { inner, bar }
    }

    /// Unwraps this `ProgressWriter`, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        if n > 0 {
            track(&self.bar, n);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
