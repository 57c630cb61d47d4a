// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Row limit substituted when the user enters a negative number.
pub const DEFAULT_ROW_LIMIT: i64 = 10;

/// Initial value of the rows field in the search details panel.
pub const DEFAULT_ROWS_INPUT: &str = "10";

/// Timeout applied to manifest fetches and search requests (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IIIFViewer/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// The list surface is shown when a viewer opens.
pub const DEFAULT_LIST_VISIBLE: bool = true;

/// The icon surface is hidden when a viewer opens.
pub const DEFAULT_ICON_VISIBLE: bool = false;
