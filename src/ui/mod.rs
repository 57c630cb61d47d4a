// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, handles its own messages and reports upward through an
//! `Effect` value plus [`crate::task::Deferred`] work.
//!
//! - [`viewer`] - Paginated viewer host with navbar, drawing surface and overlays
//! - [`surface`] - Page list and icon grid
//! - [`search`] - Search modal, query bar and result cards
//! - [`component`] - Closed set of child components and the container seam
//! - [`widgets`] - Custom canvas widgets (progress bar)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod component;
pub mod design_tokens;
pub mod search;
pub mod styles;
pub mod surface;
pub mod viewer;
pub mod widgets;
