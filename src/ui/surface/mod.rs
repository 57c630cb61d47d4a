// SPDX-License-Identifier: MPL-2.0
//! Page surfaces of a viewer host.
//!
//! The list surface shows one row per page and tracks which page is active.
//! The icon surface shows one tile per page. Both accept only their own item
//! type and mark every accepted item as loading.

pub mod icon;
pub mod list;

pub use icon::{IconItem, IconSurface};
pub use list::{ListItem, ListSurface};

/// Load state of a presentation item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Not yet handed to a surface.
    #[default]
    Idle,
    /// Waiting for the asset behind the item.
    Loading,
    /// Asset is available.
    Loaded,
}

/// A bound item asking its host to show its asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position of the item inside its surface.
    pub position: usize,
    /// Asset source reference carried by the item.
    pub src: String,
}
