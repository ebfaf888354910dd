//! Progress logging for synchronous iterators

use std::iter::FusedIterator;
use std::time::Duration;

use super::{ProgressConfig, Tracker, factory_label};

/// An iterator that logs its own progress.
///
/// Items, their order and termination are those of the inner iterator.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TimedIterator<I> {
    inner: I,
    tracker: Tracker,
}

impl<I> TimedIterator<I> {
    pub fn new(inner: I, config: &ProgressConfig) -> Self {
        Self {
            inner,
            tracker: Tracker::new(config),
        }
    }

    /// Number of items yielded so far.
    pub fn count_so_far(&self) -> u64 {
        self.tracker.count()
    }

    /// Time since the first item was requested.
    pub fn elapsed(&self) -> Duration {
        self.tracker.elapsed()
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for TimedIterator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.tracker.start();
        match self.inner.next() {
            Some(item) => {
                self.tracker.record();
                Some(item)
            }
            None => {
                self.tracker.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for TimedIterator<I> {}

/// Extension trait for timing iterators
pub trait TimedIteratorExt: Iterator + Sized {
    /// Log the progress of this iterator
    ///
    /// ```rust
    /// use strata_log::{ProgressConfig, TimedIteratorExt};
    ///
    /// let total: u32 = (1..=4).timed(&ProgressConfig::new().label("numbers")).sum();
    /// assert_eq!(total, 10);
    /// ```
    fn timed(self, config: &ProgressConfig) -> TimedIterator<Self> {
        TimedIterator::new(self, config)
    }
}

impl<I: Iterator> TimedIteratorExt for I {}

/// Wraps a producer so every iterator it creates logs its progress.
///
/// Each call of the returned closure starts a fresh count and clock. Without
/// an explicit label, a named function labels its lines with its own name.
///
/// ```rust
/// use strata_log::{ProgressConfig, timed_generator};
///
/// let rows = timed_generator(ProgressConfig::new().label("rows"), || vec!["a", "b"]);
/// assert_eq!(rows().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(rows().count(), 2);
/// ```
pub fn timed_generator<F, I>(
    config: ProgressConfig,
    factory: F,
) -> impl Fn() -> TimedIterator<I::IntoIter>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    let config = config.or_label(factory_label::<F>().as_deref());
    move || TimedIterator::new(factory().into_iter(), &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::capture::capture;
    use pretty_assertions::assert_eq;

    #[test]
    fn items_are_unchanged() {
        let (items, _) = capture(|| (0..5).timed(&ProgressConfig::default()).collect::<Vec<_>>());
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn counts_as_it_goes() {
        let mut iter = ["a", "b"].into_iter().timed(&ProgressConfig::disabled());
        assert_eq!(iter.count_so_far(), 0);
        iter.next();
        assert_eq!(iter.count_so_far(), 1);
        assert_eq!(iter.size_hint(), (1, Some(1)));
    }

    fn fetch_rows() -> std::ops::Range<u32> {
        0..2
    }

    #[test]
    fn generator_label_defaults_to_function_name() {
        let rows = timed_generator(ProgressConfig::new(), fetch_rows);
        let (_, logs) = capture(|| rows().count());
        assert!(logs.contains("Yielded 2 fetch_rows in"), "{logs}");

        let closure = timed_generator(ProgressConfig::new(), || 0..2);
        let (_, logs) = capture(|| closure().count());
        assert!(logs.contains("Yielded 2 items in"), "{logs}");
    }

    #[test]
    fn empty_iterator_still_summarises() {
        let (_, logs) = capture(|| std::iter::empty::<u8>().timed(&ProgressConfig::default()).count());
        assert!(logs.contains("Started items at"));
        assert!(logs.contains("Yielded 0 items in"));
    }
}
