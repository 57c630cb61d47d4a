// SPDX-License-Identifier: MPL-2.0
pub mod progress_bar;

pub use progress_bar::ProgressBar;
