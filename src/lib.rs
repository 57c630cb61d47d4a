// SPDX-License-Identifier: MPL-2.0
//! `iiif_viewer` is an embeddable paginated viewer for IIIF manifests, built
//! with the Iced GUI framework, together with a search widget that opens
//! viewers for the manifests it finds.
//!
//! Rendering and asset fetching are delegated to a [`engine::RenderEngine`]
//! supplied by the embedder through an [`engine::EngineFactory`].

pub mod app;
pub mod binding;
pub mod config;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod ids;
pub mod logging;
pub mod net;
pub mod task;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
