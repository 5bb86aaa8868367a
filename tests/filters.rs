use std::future::Future;
use std::time::Duration;

use async_io::Timer;
use futures_lite::future;
use futures_lite::stream::StreamExt;
use settled::{fail_fast, failures, successes};

/// Bounds a test body, panicking if it takes suspiciously long.
async fn deadline<T>(fut: impl Future<Output = T>) -> T {
    future::or(fut, async {
        Timer::after(Duration::from_secs(1)).await;
        panic!("test took too long")
    })
    .await
}

#[test]
fn successes_and_failures_split_the_input() {
    future::block_on(async {
        let n = 10 + fastrand::usize(..10);

        let ok_tasks = (0..n).map(|i| async move {
            if i % 2 == 0 {
                Ok(i)
            } else {
                Err(i)
            }
        });
        let err_tasks = (0..n).map(|i| async move {
            if i % 2 == 0 {
                Ok(i)
            } else {
                Err(i)
            }
        });

        let ok_count = successes(ok_tasks).count().await;
        let err_count = failures(err_tasks).count().await;

        assert_eq!(ok_count, (n + 1) / 2);
        assert_eq!(err_count, n / 2);
        assert_eq!(ok_count + err_count, n);
    });
}

#[test]
fn successes_count_right_with_delays() {
    future::block_on(deadline(async {
        let n = 10 + fastrand::usize(..10);
        let tasks = (0..n).map(|i| async move {
            Timer::after(Duration::from_millis(fastrand::u64(..50))).await;
            if i % 2 == 0 {
                Ok(i)
            } else {
                Err(i)
            }
        });

        assert_eq!(successes(tasks).count().await, (n + 1) / 2);
    }));
}

#[test]
fn failures_count_right_with_delays() {
    future::block_on(deadline(async {
        let n = 10 + fastrand::usize(..10);
        let tasks = (0..n).map(|i| async move {
            Timer::after(Duration::from_millis(fastrand::u64(..50))).await;
            if i % 2 == 0 {
                Ok(i)
            } else {
                Err(i)
            }
        });

        assert_eq!(failures(tasks).count().await, n / 2);
    }));
}

#[test]
fn fail_fast_stops_at_first_failure() {
    future::block_on(async {
        let tasks = vec![
            future::ready(Ok::<i32, &str>(1)),
            future::ready(Err("boom")),
            future::ready(Ok(3)),
        ];

        let mut results = fail_fast(tasks);
        assert_eq!(results.next().await, Some(Ok(1)));
        assert_eq!(results.next().await, Some(Err("boom")));
        // `Ok(3)` is never delivered, and the stream stays finished.
        assert_eq!(results.next().await, None);
        assert_eq!(results.next().await, None);
    });
}

#[test]
fn fail_fast_propagates_through_question_mark() {
    future::block_on(async {
        let tasks = (0..5).map(|i| async move { if i == 2 { Err(i) } else { Ok(i) } });

        let drained: Result<Vec<i32>, i32> = async {
            let mut values = Vec::new();
            let mut results = fail_fast(tasks);
            while let Some(result) = results.next().await {
                values.push(result?);
            }
            Ok(values)
        }
        .await;

        assert_eq!(drained, Err(2));
    });
}

#[test]
fn fail_fast_clean_when_nothing_fails() {
    future::block_on(async {
        let tasks = (0..5).map(|i| async move { Ok::<i32, i32>(i) });

        let drained: Result<Vec<i32>, i32> = async {
            let mut values = Vec::new();
            let mut results = fail_fast(tasks);
            while let Some(result) = results.next().await {
                values.push(result?);
            }
            Ok(values)
        }
        .await;

        assert_eq!(drained, Ok(vec![0, 1, 2, 3, 4]));
    });
}

#[test]
fn fail_fast_always_surfaces_a_failure() {
    future::block_on(deadline(async {
        let n = 10 + fastrand::usize(..10);
        let tasks = (0..n).map(|i| async move {
            Timer::after(Duration::from_millis(fastrand::u64(..50))).await;
            if i % 2 == 0 {
                Ok(i)
            } else {
                Err(i)
            }
        });

        let mut results = fail_fast(tasks);
        let mut last = None;
        while let Some(result) = results.next().await {
            last = Some(result);
        }

        // The input contains failures, so the stream must end on one.
        assert!(matches!(last, Some(Err(_))));
    }));
}
