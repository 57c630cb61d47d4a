// SPDX-License-Identifier: MPL-2.0
//! Contract with the external rendering engine.
//!
//! The engine parses manifests, owns the asset table and the current index,
//! lays out and draws pages, and hit-tests pointer input. The widgets in this
//! crate never duplicate that state: they ask the engine every time.

pub mod asset;

pub use asset::{signal, AssetHandle, AssetNotifier};

use iced::widget::canvas::Frame;
use iced::{Point, Size};

/// Index of a page as requested by navigation.
///
/// Signed because requests are not clamped here: `prev()` on the first page
/// asks the engine for `-1`, and the engine is expected to refuse it.
pub type PageIndex = isize;

/// Directional hint returned by the engine for a click on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionHint {
    /// Click landed on the side facing the start of the collection.
    TowardStart,
    /// Click landed on the side facing the end of the collection.
    TowardEnd,
}

/// Pointer input forwarded verbatim to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Cursor position relative to the drawing surface.
    pub position: Point,
    /// Size of the drawing surface when the event happened.
    pub bounds: Size,
}

impl PointerEvent {
    #[must_use]
    pub fn new(position: Point, bounds: Size) -> Self {
        Self { position, bounds }
    }
}

/// The rendering engine as seen by a viewer host.
pub trait RenderEngine {
    /// Parses manifest text. `false` means the manifest was rejected.
    fn set_manifest(&mut self, text: &str) -> bool;

    /// Human-readable manifest label.
    fn label(&self) -> String;

    /// Number of assets; fixed once a manifest is accepted.
    fn size(&self) -> usize;

    /// Source reference of the asset at `index`.
    fn asset_src(&self, index: usize) -> Option<String>;

    /// Displays `index`. `false` when the asset is not ready or out of range.
    fn show(&mut self, index: PageIndex) -> bool;

    /// Currently displayed index.
    fn index(&self) -> PageIndex;

    /// Resolves an asset source reference to its index.
    fn index_by_src(&self, src: &str) -> Option<usize>;

    /// Whether the asset is already loading or loaded.
    fn is_loading(&self, index: usize) -> bool;

    /// Starts loading the asset at `index`.
    fn load(&mut self, index: usize);

    /// Availability signal for the asset at `index`, if such an asset exists.
    fn asset_handle(&self, index: PageIndex) -> Option<AssetHandle>;

    fn mouse_down(&mut self, event: PointerEvent);

    fn mouse_move(&mut self, event: PointerEvent);

    fn mouse_up(&mut self, event: PointerEvent);

    /// Handles a click and reports which side of the page was hit, if any.
    fn click(&mut self, event: PointerEvent) -> Option<DirectionHint>;

    /// Paints the current page onto the drawing surface.
    fn draw(&self, _frame: &mut Frame) {}

    /// Releases engine resources. Called exactly once when a host is disposed.
    fn free(&mut self);
}

/// Builds one engine per viewer host.
pub trait EngineFactory {
    fn create(&self) -> Box<dyn RenderEngine>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Box<dyn RenderEngine>,
{
    fn create(&self) -> Box<dyn RenderEngine> {
        self()
    }
}
