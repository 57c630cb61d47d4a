// SPDX-License-Identifier: MPL-2.0
//! Generic UI component capability.
//!
//! Every insertable piece of the widget tree is one variant of
//! [`Component`]. Containers decide for themselves which variants they
//! accept; anything else is dropped without an error.

use crate::ui::search::card::SearchResultCard;
use crate::ui::surface::{IconItem, ListItem};

#[derive(Debug, Clone)]
pub enum Component {
    ListItem(ListItem),
    IconItem(IconItem),
    SearchCard(SearchResultCard),
}

impl Component {
    /// Short variant name for log output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Component::ListItem(_) => "list-item",
            Component::IconItem(_) => "icon-item",
            Component::SearchCard(_) => "search-card",
        }
    }
}

impl From<ListItem> for Component {
    fn from(item: ListItem) -> Self {
        Component::ListItem(item)
    }
}

impl From<IconItem> for Component {
    fn from(item: IconItem) -> Self {
        Component::IconItem(item)
    }
}

impl From<SearchResultCard> for Component {
    fn from(card: SearchResultCard) -> Self {
        Component::SearchCard(card)
    }
}

/// A component that holds an ordered list of children.
pub trait Container {
    /// Inserts `child` at the end. Returns `false` (and drops the child) when
    /// this container does not accept that kind of component.
    fn append(&mut self, child: Component) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Logs a rejected insertion. Rejections are never surfaced to the user.
pub(crate) fn reject(container: &'static str, child: &Component) -> bool {
    tracing::trace!(container, child = child.kind(), "dropping child of unexpected type");
    false
}
