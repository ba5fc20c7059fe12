//! Buffering of consecutive unchanged elements.

use core::mem;

/// Consecutive matched elements that are equal on both sides.
#[derive(Debug, Default)]
pub(crate) struct UnchangedRun {
    /// Indices into the second list
    pending: Vec<usize>,
}

/// What a flushed run turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Collapsed {
    /// The run was empty
    Nothing,
    /// Show this element as is
    Single(usize),
    /// Show `… (N unchanged)`
    Summary(usize),
}

impl UnchangedRun {
    pub(crate) fn push(&mut self, index: usize) {
        self.pending.push(index);
    }

    /// Empties the run.
    ///
    /// In sorted containers an element's neighbors are not meaningful, so
    /// even a single unchanged element is summarized.
    pub(crate) fn flush(&mut self, sorted: bool) -> Collapsed {
        match mem::take(&mut self.pending).as_slice() {
            [] => Collapsed::Nothing,
            [index] if !sorted => Collapsed::Single(*index),
            run => Collapsed::Summary(run.len()),
        }
    }
}

/// The line standing in for `count` unchanged elements.
pub(crate) fn summary_line(count: usize) -> String {
    format!("… ({count} unchanged)")
}
