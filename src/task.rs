// SPDX-License-Identifier: MPL-2.0
//! Deferred work returned from component `update` functions.
//!
//! Components never run I/O inside `update`. They hand back a [`Deferred`]
//! describing futures to run; the application converts it into an
//! [`iced::Task`], and tests can drive the same futures directly.

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// One unit of deferred work. `None` means "finished without a message".
pub type Job<M> = BoxFuture<'static, Option<M>>;

/// A batch of futures whose outputs are fed back as messages.
#[must_use = "deferred work does nothing unless it is run"]
pub struct Deferred<M> {
    jobs: Vec<Job<M>>,
}

impl<M> std::fmt::Debug for Deferred<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("jobs", &self.jobs.len())
            .finish()
    }
}

impl<M> Default for Deferred<M> {
    fn default() -> Self {
        Self { jobs: Vec::new() }
    }
}

impl<M: Send + 'static> Deferred<M> {
    pub fn none() -> Self {
        Self::default()
    }

    /// Delivers `message` on the next turn of the runtime.
    pub fn done(message: M) -> Self {
        Self::optional(future::ready(Some(message)))
    }

    /// Runs `future` and maps its output to a message.
    pub fn perform<T, F>(future: F, f: impl FnOnce(T) -> M + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::optional(future.map(|output| Some(f(output))))
    }

    /// Runs a future that may finish without producing a message.
    pub fn optional<F>(future: F) -> Self
    where
        F: Future<Output = Option<M>> + Send + 'static,
    {
        Self {
            jobs: vec![future.boxed()],
        }
    }

    pub fn batch(batches: impl IntoIterator<Item = Deferred<M>>) -> Self {
        Self {
            jobs: batches.into_iter().flat_map(|d| d.jobs).collect(),
        }
    }

    /// Appends the jobs of `other`.
    pub fn extend(&mut self, other: Deferred<M>) {
        self.jobs.extend(other.jobs);
    }

    pub fn map<N: Send + 'static>(self, f: impl Fn(M) -> N + Send + Sync + 'static) -> Deferred<N> {
        let f = Arc::new(f);
        Deferred {
            jobs: self
                .jobs
                .into_iter()
                .map(|job| {
                    let f = Arc::clone(&f);
                    job.map(move |output| output.map(|m| (*f)(m))).boxed()
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn into_jobs(self) -> Vec<Job<M>> {
        self.jobs
    }

    /// Converts the batch into an iced task.
    pub fn into_task(self) -> iced::Task<M> {
        iced::Task::batch(
            self.jobs
                .into_iter()
                .map(|job| iced::Task::future(job).and_then(iced::Task::done)),
        )
    }
}

/// Cancellation scope tied to the lifetime of one widget.
///
/// Every future that would call back into a widget is wrapped with
/// [`Lifetime::guard`]; once the widget ends its lifetime those futures
/// resolve to `None` instead of delivering a message.
#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    token: CancellationToken,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels every guarded future. Idempotent.
    pub fn end(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Races `future` against the end of this lifetime.
    pub fn guard<F>(&self, future: F) -> impl Future<Output = Option<F::Output>> + Send + 'static
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let token = self.token.clone();
        async move {
            tokio::select! {
                biased;
                () = token.cancelled() => None,
                output = future => Some(output),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_all<M: Send + 'static>(deferred: Deferred<M>) -> Vec<M> {
        future::join_all(deferred.into_jobs())
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    #[tokio::test]
    async fn done_delivers_message() {
        assert_eq!(run_all(Deferred::done(5)).await, vec![5]);
    }

    #[tokio::test]
    async fn batch_keeps_every_job_and_map_applies() {
        let deferred = Deferred::batch([
            Deferred::done(1),
            Deferred::none(),
            Deferred::perform(async { 20 }, |n| n + 1),
        ])
        .map(|n| n * 2);

        assert_eq!(deferred.len(), 2);
        assert_eq!(run_all(deferred).await, vec![2, 42]);
    }

    #[tokio::test]
    async fn optional_job_may_finish_silently() {
        let deferred: Deferred<u8> = Deferred::optional(async { None });
        assert!(run_all(deferred).await.is_empty());
    }

    #[tokio::test]
    async fn guard_passes_output_through_while_alive() {
        let lifetime = Lifetime::new();
        assert_eq!(lifetime.guard(async { 3 }).await, Some(3));
    }

    #[tokio::test]
    async fn ended_lifetime_cancels_pending_future() {
        let lifetime = Lifetime::new();
        let guarded = lifetime.guard(future::pending::<()>());
        let waiter = tokio::spawn(guarded);

        lifetime.end();

        assert_eq!(waiter.await.unwrap(), None);
        assert!(lifetime.is_ended());
    }

    #[tokio::test]
    async fn guard_created_after_end_never_delivers() {
        let lifetime = Lifetime::new();
        lifetime.end();
        assert_eq!(lifetime.guard(async { 1 }).await, None);
    }
}
