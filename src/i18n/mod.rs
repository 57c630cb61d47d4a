// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the widgets.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale is
//! chosen from the CLI flag, then the config file, then the OS, falling back
//! to `en-US`.

pub mod fluent;
