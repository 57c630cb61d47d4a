// SPDX-License-Identifier: MPL-2.0
//! One-shot "asset became available" signal shared between the engine and
//! the orchestration layer.
//!
//! The engine keeps the [`AssetNotifier`] and fires it when the image behind
//! an index finishes loading. Any number of [`AssetHandle`] clones can wait
//! on it; a handle created after the asset loaded resolves immediately.

use crate::engine::PageIndex;
use crate::error::{Error, Result};
use tokio::sync::watch;

/// Engine-side half of an availability signal.
#[derive(Debug)]
pub struct AssetNotifier {
    index: PageIndex,
    sender: watch::Sender<bool>,
}

/// Orchestration-side half: an awaitable view of one asset's availability.
#[derive(Debug, Clone)]
pub struct AssetHandle {
    index: PageIndex,
    receiver: watch::Receiver<bool>,
}

/// Creates a connected notifier/handle pair for the asset at `index`.
#[must_use]
pub fn signal(index: PageIndex) -> (AssetNotifier, AssetHandle) {
    let (sender, receiver) = watch::channel(false);
    (
        AssetNotifier { index, sender },
        AssetHandle { index, receiver },
    )
}

impl AssetNotifier {
    /// Marks the asset available and wakes every waiting handle.
    pub fn notify_available(&self) {
        self.sender.send_replace(true);
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        *self.sender.borrow()
    }

    /// Hands out another waiter for the same asset.
    #[must_use]
    pub fn handle(&self) -> AssetHandle {
        AssetHandle {
            index: self.index,
            receiver: self.sender.subscribe(),
        }
    }
}

impl AssetHandle {
    #[must_use]
    pub fn index(&self) -> PageIndex {
        self.index
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once the asset is available.
    ///
    /// There is no timeout. The only failure is the engine dropping the
    /// notifier before the asset loaded.
    pub async fn available(mut self) -> Result<PageIndex> {
        let index = self.index;
        let ready = self.receiver.wait_for(|ready| *ready).await.is_ok();
        if ready {
            Ok(index)
        } else {
            Err(Error::AssetUnavailable { index })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handle_resolves_after_notification() {
        let (notifier, handle) = signal(3);
        let waiter = tokio::spawn(handle.available());

        notifier.notify_available();

        assert_eq!(waiter.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn late_handle_resolves_immediately() {
        let (notifier, _first) = signal(0);
        notifier.notify_available();

        let late = notifier.handle();
        assert!(late.is_available());
        assert_eq!(late.available().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn dropped_notifier_fails_pending_handles() {
        let (notifier, handle) = signal(7);
        drop(notifier);

        assert!(matches!(
            handle.available().await,
            Err(Error::AssetUnavailable { index: 7 })
        ));
    }

    #[tokio::test]
    async fn available_even_if_notifier_dropped_afterwards() {
        let (notifier, handle) = signal(1);
        notifier.notify_available();
        drop(notifier);

        assert_eq!(handle.available().await.unwrap(), 1);
    }
}
