// SPDX-License-Identifier: MPL-2.0
//! Scriptable rendering engine for tests and benchmarks.
//!
//! [`FakeEngine`] keeps its state behind a shared handle so a test can hand
//! the engine to a viewer host and still drive it through [`FakeControl`]:
//! mark assets loaded, choose the click hint, and inspect recorded calls.

use crate::engine::{signal, AssetHandle, AssetNotifier, DirectionHint, PageIndex, PointerEvent, RenderEngine};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetState {
    Pending,
    Loading,
    Loaded,
}

#[derive(Debug)]
struct Asset {
    src: String,
    state: AssetState,
    notifier: AssetNotifier,
}

/// Pointer call recorded by the fake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerCall {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    Click(PointerEvent),
}

#[derive(Debug)]
struct Inner {
    label: String,
    accept_manifest: bool,
    accepted: bool,
    assets: Vec<Asset>,
    index: PageIndex,
    /// Mark assets loaded as soon as they are requested.
    load_instantly: bool,
    click_hint: Option<DirectionHint>,
    shows: Vec<(PageIndex, bool)>,
    loads: Vec<usize>,
    pointer: Vec<PointerCall>,
    frees: usize,
}

impl Inner {
    fn mark_loaded(&mut self, index: usize) {
        if let Some(asset) = self.assets.get_mut(index) {
            asset.state = AssetState::Loaded;
            asset.notifier.notify_available();
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory engine with `n` pages named `page-<i>`.
#[derive(Debug)]
pub struct FakeEngine {
    inner: Arc<Mutex<Inner>>,
}

/// Test-side view of a [`FakeEngine`] that has been moved elsewhere.
#[derive(Debug, Clone)]
pub struct FakeControl {
    inner: Arc<Mutex<Inner>>,
}

impl FakeEngine {
    #[must_use]
    pub fn new(pages: usize) -> Self {
        let assets = (0..pages)
            .map(|i| {
                let (notifier, _) = signal(i as isize);
                Asset {
                    src: format!("page-{i}"),
                    state: AssetState::Pending,
                    notifier,
                }
            })
            .collect();
        Self {
            inner: Arc::new(Mutex::new(Inner {
                label: "Fake Manifest".to_string(),
                accept_manifest: true,
                accepted: false,
                assets,
                index: 0,
                load_instantly: false,
                click_hint: None,
                shows: Vec::new(),
                loads: Vec::new(),
                pointer: Vec::new(),
                frees: 0,
            })),
        }
    }

    /// Engine that refuses every manifest.
    #[must_use]
    pub fn rejecting() -> Self {
        let engine = Self::new(0);
        lock(&engine.inner).accept_manifest = false;
        engine
    }

    #[must_use]
    pub fn with_label(self, label: &str) -> Self {
        lock(&self.inner).label = label.to_string();
        self
    }

    /// Every requested load completes immediately.
    #[must_use]
    pub fn loading_instantly(self) -> Self {
        lock(&self.inner).load_instantly = true;
        self
    }

    #[must_use]
    pub fn control(&self) -> FakeControl {
        FakeControl {
            inner: Arc::clone(&self.inner),
        }
    }

    #[must_use]
    pub fn boxed(self) -> Box<dyn RenderEngine> {
        Box::new(self)
    }
}

impl FakeControl {
    /// Marks the asset loaded and fires its availability signal.
    pub fn mark_loaded(&self, index: usize) {
        lock(&self.inner).mark_loaded(index);
    }

    pub fn set_click_hint(&self, hint: Option<DirectionHint>) {
        lock(&self.inner).click_hint = hint;
    }

    /// Indices passed to `load`, in call order.
    #[must_use]
    pub fn load_requests(&self) -> Vec<usize> {
        lock(&self.inner).loads.clone()
    }

    /// `(index, accepted)` for every `show` call, in call order.
    #[must_use]
    pub fn show_calls(&self) -> Vec<(PageIndex, bool)> {
        lock(&self.inner).shows.clone()
    }

    #[must_use]
    pub fn pointer_calls(&self) -> Vec<PointerCall> {
        lock(&self.inner).pointer.clone()
    }

    #[must_use]
    pub fn index(&self) -> PageIndex {
        lock(&self.inner).index
    }

    #[must_use]
    pub fn free_count(&self) -> usize {
        lock(&self.inner).frees
    }
}

impl RenderEngine for FakeEngine {
    fn set_manifest(&mut self, text: &str) -> bool {
        let mut inner = lock(&self.inner);
        inner.accepted = inner.accept_manifest && !text.trim().is_empty();
        inner.accepted
    }

    fn label(&self) -> String {
        lock(&self.inner).label.clone()
    }

    fn size(&self) -> usize {
        let inner = lock(&self.inner);
        if inner.accepted {
            inner.assets.len()
        } else {
            0
        }
    }

    fn asset_src(&self, index: usize) -> Option<String> {
        lock(&self.inner).assets.get(index).map(|asset| asset.src.clone())
    }

    fn show(&mut self, index: PageIndex) -> bool {
        let mut inner = lock(&self.inner);
        let ready = usize::try_from(index)
            .ok()
            .and_then(|i| inner.assets.get(i))
            .is_some_and(|asset| asset.state == AssetState::Loaded);
        if ready {
            inner.index = index;
        }
        inner.shows.push((index, ready));
        ready
    }

    fn index(&self) -> PageIndex {
        lock(&self.inner).index
    }

    fn index_by_src(&self, src: &str) -> Option<usize> {
        lock(&self.inner).assets.iter().position(|asset| asset.src == src)
    }

    fn is_loading(&self, index: usize) -> bool {
        lock(&self.inner)
            .assets
            .get(index)
            .is_some_and(|asset| asset.state != AssetState::Pending)
    }

    fn load(&mut self, index: usize) {
        let mut inner = lock(&self.inner);
        inner.loads.push(index);
        let instantly = inner.load_instantly;
        if let Some(asset) = inner.assets.get_mut(index) {
            if asset.state == AssetState::Pending {
                asset.state = AssetState::Loading;
            }
        }
        if instantly {
            inner.mark_loaded(index);
        }
    }

    fn asset_handle(&self, index: PageIndex) -> Option<AssetHandle> {
        let inner = lock(&self.inner);
        usize::try_from(index)
            .ok()
            .and_then(|i| inner.assets.get(i))
            .map(|asset| asset.notifier.handle())
    }

    fn mouse_down(&mut self, event: PointerEvent) {
        lock(&self.inner).pointer.push(PointerCall::Down(event));
    }

    fn mouse_move(&mut self, event: PointerEvent) {
        lock(&self.inner).pointer.push(PointerCall::Move(event));
    }

    fn mouse_up(&mut self, event: PointerEvent) {
        lock(&self.inner).pointer.push(PointerCall::Up(event));
    }

    fn click(&mut self, event: PointerEvent) -> Option<DirectionHint> {
        let mut inner = lock(&self.inner);
        inner.pointer.push(PointerCall::Click(event));
        inner.click_hint
    }

    fn free(&mut self) {
        lock(&self.inner).frees += 1;
    }
}
