// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::ids::ViewerId;
use crate::ui::{search, viewer};
use std::time::Instant;

/// Top-level messages consumed by [`super::Workspace::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    /// Message addressed to one viewer host. Dropped once that host is gone.
    Viewer(ViewerId, viewer::Message),
    /// Animation tick for progress overlays.
    Tick(Instant),
}

/// Runtime flags passed in by the embedder.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IIIF_VIEWER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Manifest URLs to open as viewers on startup.
    pub manifests: Vec<String>,
}
