// SPDX-License-Identifier: MPL-2.0
//! Reconciles "show this page" with the asynchronous readiness of its asset.
//!
//! A request either shows the page at once, or, when the engine is not ready,
//! parks on the availability future of that asset. When the future resolves
//! the host retries the request from the top.

use super::Message;
use crate::engine::{AssetHandle, PageIndex, RenderEngine};
use crate::task::{Deferred, Lifetime};
use crate::ui::surface::ListSurface;
use futures_util::FutureExt;

/// Result of one show attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The engine displays the page and the list marks it active.
    Shown,
    /// The asset is not ready; wait on `handle` and retry.
    Waiting(AssetHandle),
    /// The engine refused the index and there is nothing to wait for.
    Dropped,
}

/// Asks the engine to show `index`.
pub fn attempt(engine: &mut dyn RenderEngine, list: &mut ListSurface, index: PageIndex) -> Outcome {
    if engine.show(index) {
        list.activate(index);
        tracing::debug!(index, "page shown");
        return Outcome::Shown;
    }

    match engine.asset_handle(index) {
        // An asset that is already available but still refused would retry forever.
        Some(handle) if handle.is_available() => {
            tracing::debug!(index, "engine refused an available page");
            Outcome::Dropped
        }
        Some(handle) => {
            tracing::debug!(index, "waiting for asset");
            Outcome::Waiting(handle)
        }
        None => {
            tracing::debug!(index, "no such page");
            Outcome::Dropped
        }
    }
}

/// Awaits the asset behind `handle` for as long as `lifetime` lasts.
pub fn await_asset(handle: AssetHandle, lifetime: &Lifetime) -> Deferred<Message> {
    let index = handle.index();
    Deferred::optional(lifetime.guard(handle.available()).map(move |outcome| {
        outcome.map(|ready| match ready {
            Ok(index) => Message::AssetReady(index),
            Err(error) => Message::AssetLost { index, error },
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Ancestry, Owner};
    use crate::ids::IdGenerator;
    use crate::test_utils::FakeEngine;
    use crate::ui::component::Container;
    use crate::ui::surface::ListItem;

    fn list_for(engine: &FakeEngine) -> ListSurface {
        let id = IdGenerator::new().next_id();
        let mut list = ListSurface::new(&Ancestry::root(Owner::host(id)), true);
        for i in 0..engine.size() {
            list.append(ListItem::new(engine.asset_src(i).unwrap_or_default(), (i + 1).to_string()).into());
        }
        list
    }

    fn loaded_engine(ready: &[usize]) -> FakeEngine {
        let mut engine = FakeEngine::new(3);
        assert!(engine.set_manifest("{}"));
        for &i in ready {
            engine.control().mark_loaded(i);
        }
        engine
    }

    #[test]
    fn ready_page_is_shown_and_activated() {
        let mut engine = loaded_engine(&[1]);
        let mut list = list_for(&engine);

        assert!(matches!(attempt(&mut engine, &mut list, 1), Outcome::Shown));
        assert_eq!(engine.index(), 1);
        assert_eq!(list.active_index(), Some(1));
    }

    #[test]
    fn pending_page_waits_without_activating() {
        let mut engine = loaded_engine(&[]);
        let mut list = list_for(&engine);

        match attempt(&mut engine, &mut list, 0) {
            Outcome::Waiting(handle) => assert_eq!(handle.index(), 0),
            other => panic!("expected Waiting, got {other:?}"),
        }
        assert_eq!(list.active_index(), None);
    }

    #[test]
    fn out_of_range_page_is_dropped() {
        let mut engine = loaded_engine(&[0]);
        let mut list = list_for(&engine);

        assert!(matches!(attempt(&mut engine, &mut list, -1), Outcome::Dropped));
        assert!(matches!(attempt(&mut engine, &mut list, 3), Outcome::Dropped));
    }

    #[tokio::test]
    async fn await_asset_reports_readiness() {
        let engine = loaded_engine(&[]);
        let lifetime = Lifetime::new();
        let handle = engine.asset_handle(2).unwrap();

        let mut jobs = await_asset(handle, &lifetime).into_jobs();
        engine.control().mark_loaded(2);

        let message = jobs.pop().unwrap().await;
        assert!(matches!(message, Some(Message::AssetReady(2))));
    }

    #[tokio::test]
    async fn ended_lifetime_silences_the_wait() {
        let engine = loaded_engine(&[]);
        let lifetime = Lifetime::new();
        let handle = engine.asset_handle(0).unwrap();

        let mut jobs = await_asset(handle, &lifetime).into_jobs();
        lifetime.end();

        assert!(jobs.pop().unwrap().await.is_none());
    }
}
