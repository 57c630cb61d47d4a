// SPDX-License-Identifier: MPL-2.0
//! Paginated viewer widget.
//!
//! A [`ViewerHost`] owns the rendering engine, the drawing surface and both
//! page surfaces. It fetches its manifest, fills the surfaces, shows the
//! first page and then loads the remaining assets in the background.

pub mod canvas;
pub mod component;
pub mod lazy_load;
pub mod navbar;
pub mod progress;
pub mod show;
pub mod view;

pub use component::ViewerHost;

use crate::engine::PageIndex;
use crate::error::{Error, Result};
use crate::ui::surface::Selection;

#[derive(Debug, Clone)]
pub enum Message {
    ManifestFetched(Result<String>),
    /// Starts the background load pass once the first page is handled.
    StartLazyLoad,
    AssetLoaded(usize),
    /// A page that was waiting for its asset can be shown now.
    AssetReady(PageIndex),
    AssetLost {
        index: PageIndex,
        error: Error,
    },
    ListSelected(Selection),
    IconSelected(Selection),
    Pointer(canvas::Pointer),
    Nav(navbar::Message),
    Tick,
}

/// Events for the composition root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The host asks to be disposed and removed.
    Remove,
}
