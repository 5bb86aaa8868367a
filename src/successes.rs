//! Implementation of [`successes()`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::stream::Stream;

use crate::settled::{settled, Settled};

/// Awaits tasks in completion order, yielding only the success values.
///
/// Failed tasks are skipped. The stream ends once every task has settled, so
/// an input of `n` tasks yields as many values as there are successes among
/// them.
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
///     let mut values = settled::successes(tasks);
///     assert_eq!(values.next().await, Some(1));
///     assert_eq!(values.next().await, Some(3));
///     assert_eq!(values.next().await, None);
/// });
/// ```
pub fn successes<T, E, I>(tasks: I) -> Successes<I::Item>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    Successes {
        results: settled(tasks),
    }
}

/// Stream of success values in completion order, created by [`successes()`].
#[must_use = "streams do nothing unless polled"]
pub struct Successes<F: Future> {
    results: Settled<F>,
}

impl<T, E, F> Stream for Successes<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            match Pin::new(&mut this.results).poll_next(cx) {
                Poll::Ready(Some(Ok(value))) => return Poll::Ready(Some(value)),
                Poll::Ready(Some(Err(_))) => continue,
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between every remaining result failing and all succeeding.
        (0, self.results.size_hint().1)
    }
}

impl<F: Future> fmt::Debug for Successes<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Successes")
            .field("results", &self.results)
            .finish()
    }
}
