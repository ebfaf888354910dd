//! Progress logging for asynchronous streams

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_core::Stream;
use futures_core::stream::FusedStream;
use pin_project::pin_project;

use super::{ProgressConfig, Tracker, factory_label};

/// A stream that logs its own progress.
///
/// Polling adds no suspension points: `Pending` from the inner stream is
/// passed straight through.
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct TimedStream<S> {
    #[pin]
    inner: S,
    tracker: Tracker,
}

impl<S> TimedStream<S> {
    pub fn new(inner: S, config: &ProgressConfig) -> Self {
        Self {
            inner,
            tracker: Tracker::new(config),
        }
    }

    /// Number of items yielded so far.
    pub fn count_so_far(&self) -> u64 {
        self.tracker.count()
    }

    /// Time since the stream was first polled.
    pub fn elapsed(&self) -> Duration {
        self.tracker.elapsed()
    }
}

impl<S: Stream> Stream for TimedStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        this.tracker.start();

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(item)) => {
                this.tracker.record();
                Poll::Ready(Some(item))
            }
            Poll::Ready(None) => {
                this.tracker.finish();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: FusedStream> FusedStream for TimedStream<S> {
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

/// Extension trait for timing streams
pub trait TimedStreamExt: Stream + Sized {
    /// Log the progress of this stream
    fn timed(self, config: &ProgressConfig) -> TimedStream<Self> {
        TimedStream::new(self, config)
    }
}

impl<S: Stream> TimedStreamExt for S {}

/// Wraps a stream producer so every stream it creates logs its progress.
///
/// Labels follow the same rule as [`timed_generator`](super::timed_generator).
pub fn timed_async_generator<F, S>(config: ProgressConfig, factory: F) -> impl Fn() -> TimedStream<S>
where
    F: Fn() -> S,
    S: Stream,
{
    let config = config.or_label(factory_label::<F>().as_deref());
    move || TimedStream::new(factory(), &config)
}
