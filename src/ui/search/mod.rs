// SPDX-License-Identifier: MPL-2.0
//! Manifest search.
//!
//! The modal hosts a [`bar`] that builds a [`query::SearchQuery`], POSTs it
//! to the configured endpoint and renders each [`result::SearchResult`] as a
//! [`card::SearchResultCard`]. Launching a card asks the composition root for
//! a new viewer; the search widget never touches viewers itself.

pub mod bar;
pub mod card;
pub mod modal;
pub mod query;
pub mod result;

pub use modal::{Effect, Message, SearchModal};
