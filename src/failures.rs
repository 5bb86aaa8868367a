//! Implementation of [`failures()`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::stream::Stream;

use crate::settled::{settled, Settled};

/// Awaits tasks in completion order, yielding only the failure values.
///
/// Successful tasks are skipped. This is the mirror image of
/// [`successes()`][crate::successes()]: together the two streams account for
/// every task in the input.
///
/// # Examples
///
/// ```
/// use futures_lite::future;
/// use futures_lite::stream::StreamExt;
///
/// future::block_on(async {
///     let tasks = vec![
///         future::ready(Ok::<i32, i32>(1)),
///         future::ready(Err(2)),
///         future::ready(Ok(3)),
///     ];
///
///     let mut errors = settled::failures(tasks);
///     assert_eq!(errors.next().await, Some(2));
///     assert_eq!(errors.next().await, None);
/// });
/// ```
pub fn failures<T, E, I>(tasks: I) -> Failures<I::Item>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    Failures {
        results: settled(tasks),
    }
}

/// Stream of failure values in completion order, created by [`failures()`].
#[must_use = "streams do nothing unless polled"]
pub struct Failures<F: Future> {
    results: Settled<F>,
}

impl<T, E, F> Stream for Failures<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Item = E;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            match Pin::new(&mut this.results).poll_next(cx) {
                Poll::Ready(Some(Err(err))) => return Poll::Ready(Some(err)),
                Poll::Ready(Some(Ok(_))) => continue,
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.results.size_hint().1)
    }
}

impl<F: Future> fmt::Debug for Failures<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failures")
            .field("results", &self.results)
            .finish()
    }
}
