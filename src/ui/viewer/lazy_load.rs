// SPDX-License-Identifier: MPL-2.0
//! Background pass that loads every asset of a manifest.
//!
//! Every index not yet loading is handed to the engine. Every index, loading
//! or not, gets an availability future that reports back as
//! [`Message::AssetLoaded`]. Loads run with unbounded concurrency.

use super::Message;
use crate::engine::RenderEngine;
use crate::task::{Deferred, Lifetime};
use futures_util::FutureExt;

/// Requests loading of all assets and returns one availability job per asset.
pub fn schedule(engine: &mut dyn RenderEngine, lifetime: &Lifetime) -> Deferred<Message> {
    let size = engine.size();
    let mut requested = 0usize;
    let mut jobs = Deferred::none();

    for index in 0..size {
        if !engine.is_loading(index) {
            engine.load(index);
            requested += 1;
        }

        let Ok(page) = isize::try_from(index) else {
            continue;
        };
        let Some(handle) = engine.asset_handle(page) else {
            tracing::debug!(index, "asset has no availability handle");
            continue;
        };

        jobs.extend(Deferred::optional(lifetime.guard(handle.available()).map(
            move |outcome| match outcome {
                Some(Ok(_)) => Some(Message::AssetLoaded(index)),
                Some(Err(err)) => {
                    tracing::debug!(index, error = %err, "asset dropped before loading");
                    None
                }
                None => None,
            },
        )));
    }

    tracing::debug!(size, requested, "lazy load pass scheduled");
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeEngine;
    use futures_util::future;

    fn engine(n: usize) -> FakeEngine {
        let mut engine = FakeEngine::new(n);
        assert!(engine.set_manifest("{}"));
        engine
    }

    #[test]
    fn requests_only_assets_not_already_loading() {
        let mut engine = engine(4);
        engine.load(1);
        let control = engine.control();

        let jobs = schedule(&mut engine, &Lifetime::new());

        assert_eq!(jobs.len(), 4);
        assert_eq!(control.load_requests(), vec![1, 0, 2, 3]);
    }

    #[tokio::test]
    async fn every_asset_reports_once_loaded() {
        let mut engine = engine(3);
        let control = engine.control();
        let jobs = schedule(&mut engine, &Lifetime::new()).into_jobs();

        for i in 0..3 {
            control.mark_loaded(i);
        }

        let mut loaded: Vec<usize> = future::join_all(jobs)
            .await
            .into_iter()
            .flatten()
            .filter_map(|message| match message {
                Message::AssetLoaded(i) => Some(i),
                _ => None,
            })
            .collect();
        loaded.sort_unstable();
        assert_eq!(loaded, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn disposed_host_receives_nothing() {
        let mut engine = engine(2);
        let lifetime = Lifetime::new();
        let jobs = schedule(&mut engine, &lifetime).into_jobs();

        lifetime.end();

        let messages: Vec<_> = future::join_all(jobs).await.into_iter().flatten().collect();
        assert!(messages.is_empty());
    }

    #[test]
    fn empty_manifest_schedules_nothing() {
        let mut engine = engine(0);
        assert!(schedule(&mut engine, &Lifetime::new()).is_empty());
    }
}
