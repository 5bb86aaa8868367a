//! Implementation of [`collect()`].

use std::collections::HashSet;
use std::hash::Hash;

use futures_lite::stream::{Stream, StreamExt};

/// Drains a stream to the end, gathering everything it yields into a set.
///
/// The returned future completes once the stream does. Since streams like
/// [`successes()`][crate::successes()] yield in completion order, the set is
/// the order-independent way to compare their output against what awaiting
/// the tasks directly would have produced.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use futures_lite::future;
///
/// future::block_on(async {
///     let tasks = vec![
///         future::ready(Ok::<i32, i32>(1)),
///         future::ready(Err(2)),
///         future::ready(Ok(3)),
///     ];
///
///     let set = settled::collect(settled::successes(tasks)).await;
///     let expected: HashSet<i32> = vec![1, 3].into_iter().collect();
///     assert_eq!(set, expected);
/// });
/// ```
pub async fn collect<S>(stream: S) -> HashSet<S::Item>
where
    S: Stream,
    S::Item: Eq + Hash,
{
    futures_lite::pin!(stream);

    let mut set = HashSet::new();
    while let Some(item) = stream.next().await {
        set.insert(item);
    }
    set
}
