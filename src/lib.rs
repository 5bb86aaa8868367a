//! Await many tasks and take their results in completion order.
//!
//! Given a fixed collection of tasks, [`settled()`] produces a stream that
//! yields each task's result the moment it becomes available, regardless of
//! the order the tasks were listed in. The first task to finish is the first
//! one served.
//!
//! Failures are ordinary data: every item is a [`Result`], so a failed task
//! flows through the stream just like a successful one. On top of that there
//! are three filtered variants:
//!
//! - [`fail_fast()`] stops the stream right after the first failure.
//! - [`successes()`] yields only the success values.
//! - [`failures()`] yields only the failure values.
//!
//! And [`collect()`] drains any stream into an unordered set.
//!
//! Note that a plain future makes no progress until it is polled, so tasks
//! passed as bare `async` blocks only run while the stream is being consumed.
//! To keep tasks running independently of consumption, spawn them onto an
//! executor and pass the task handles instead. Dropping a stream also drops
//! the task handles it still owns.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use async_io::Timer;
//! use futures_lite::future;
//! use futures_lite::stream::StreamExt;
//!
//! future::block_on(async {
//!     let tasks = vec![("slow", 30), ("fast", 10)]
//!         .into_iter()
//!         .map(|(name, ms)| async move {
//!             Timer::after(Duration::from_millis(ms)).await;
//!             Ok::<&str, &str>(name)
//!         });
//!
//!     let mut results = settled::settled(tasks);
//!     assert_eq!(results.next().await, Some(Ok("fast")));
//!     assert_eq!(results.next().await, Some(Ok("slow")));
//!     assert_eq!(results.next().await, None);
//! });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod collect;
mod fail_fast;
mod failures;
mod settled;
mod successes;

pub use crate::collect::collect;
pub use crate::fail_fast::{fail_fast, FailFast};
pub use crate::failures::{failures, Failures};
pub use crate::settled::{settled, Settled};
pub use crate::successes::{successes, Successes};
