//! Implementation of [`fail_fast()`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::stream::Stream;

use crate::settled::{settled, Settled};

/// Awaits tasks in completion order, ending the stream at the first failure.
///
/// Success values are yielded as they arrive. The first `Err` pulled is
/// yielded as the stream's final item and the stream ends there; results of
/// the remaining tasks are never requested. Note that "first failure pulled"
/// means the earliest failure in completion order, not the first task in the
/// input that happens to fail.
///
/// Since the stream ends at the failure, a consumer can treat it as fatal
/// with `?` in its loop and the loop terminates either way.
///
/// # Examples
///
/// ```
/// use futures_lite::future;
/// use futures_lite::stream::StreamExt;
///
/// future::block_on(async {
///     let tasks = vec![
///         future::ready(Ok::<i32, &str>(1)),
///         future::ready(Err("oh no")),
///         future::ready(Ok(3)),
///     ];
///
///     let mut results = settled::fail_fast(tasks);
///     assert_eq!(results.next().await, Some(Ok(1)));
///     assert_eq!(results.next().await, Some(Err("oh no")));
///     // `Ok(3)` is never delivered.
///     assert_eq!(results.next().await, None);
/// });
/// ```
pub fn fail_fast<T, E, I>(tasks: I) -> FailFast<I::Item>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    FailFast {
        results: settled(tasks),
        done: false,
    }
}

/// Stream of task results that ends at the first failure, created by
/// [`fail_fast()`].
#[must_use = "streams do nothing unless polled"]
pub struct FailFast<F: Future> {
    results: Settled<F>,
    done: bool,
}

impl<T, E, F> Stream for FailFast<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        if this.done {
            return Poll::Ready(None);
        }

        match Pin::new(&mut this.results).poll_next(cx) {
            Poll::Ready(Some(Err(err))) => {
                this.done = true;
                Poll::Ready(Some(Err(err)))
            }
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
            poll => poll,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // The stream may end early, so only the upper bound carries over.
            (0, self.results.size_hint().1)
        }
    }
}

impl<F: Future> fmt::Debug for FailFast<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailFast")
            .field("results", &self.results)
            .field("done", &self.done)
            .finish()
    }
}
