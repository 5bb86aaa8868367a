//! Implementation of [`settled()`].
//!
//! This is the piece everything else in the crate is layered on: a stream
//! that watches a fixed set of tasks and hands out their results as they
//! arrive.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::stream::Stream;

/// Awaits a collection of tasks, yielding each result as soon as it is ready.
///
/// The input is snapshotted when this function is called; the stream yields
/// exactly one [`Result`] per task and then ends. Results come out in the
/// order the tasks finish, which for tasks of varying duration is generally
/// not the order they were passed in.
///
/// Each pull either returns a buffered result immediately or suspends until
/// the next task settles. Tasks that finish while no pull is in progress are
/// buffered and handed out by later pulls, so no result is ever lost.
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
///     let mut results = settled::settled(tasks);
///     assert_eq!(results.next().await, Some(Ok(1)));
///     assert_eq!(results.next().await, Some(Err(2)));
///     assert_eq!(results.next().await, Some(Ok(3)));
///     assert_eq!(results.next().await, None);
/// });
/// ```
pub fn settled<T, E, I>(tasks: I) -> Settled<I::Item>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    Settled {
        tasks: tasks
            .into_iter()
            .map(|task| Some(Box::pin(task)))
            .collect(),
        queue: VecDeque::new(),
        settled: 0,
    }
}

/// Stream of task results in completion order, created by [`settled()`].
#[must_use = "streams do nothing unless polled"]
pub struct Settled<F: Future> {
    /// The input tasks, in input order. A slot is cleared once its task has
    /// settled, so every task is observed exactly once.
    tasks: Vec<Option<Pin<Box<F>>>>,

    /// Results that have settled but not been handed out yet, oldest first.
    queue: VecDeque<F::Output>,

    /// Number of tasks that have settled so far.
    settled: usize,
}

// The tasks are boxed, so moving the stream itself never moves pinned data.
impl<F: Future> Unpin for Settled<F> {}

impl<T, E, F> Stream for Settled<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        // Check on every task still in flight, queueing the results of those
        // that have settled. Polling with the consumer's context means any
        // task that settles later will wake the pull that is now in progress.
        for slot in this.tasks.iter_mut() {
            if let Some(task) = slot {
                if let Poll::Ready(result) = task.as_mut().poll(cx) {
                    this.queue.push_back(result);
                    this.settled += 1;
                    *slot = None;
                }
            }
        }

        // Hand out the oldest buffered result, or end the stream once every
        // task has settled and the buffer is drained.
        match this.queue.pop_front() {
            Some(result) => Poll::Ready(Some(result)),
            None if this.settled == this.tasks.len() => Poll::Ready(None),
            None => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tasks.len() - self.settled + self.queue.len();
        (remaining, Some(remaining))
    }
}

impl<F: Future> fmt::Debug for Settled<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settled")
            .field("settled", &self.settled)
            .field("total", &self.tasks.len())
            .finish()
    }
}
