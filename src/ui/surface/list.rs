// SPDX-License-Identifier: MPL-2.0
//! Page list: one row per page with an active marker.

use super::{LoadState, Selection};
use crate::binding::{Ancestry, Attachment, Binding, Capability, Owner};
use crate::engine::PageIndex;
use crate::ui::component::{self, Component, Container};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

/// Width of the list panel.
const PANEL_WIDTH: f32 = 180.0;

/// One row of the page list.
#[derive(Debug, Clone)]
pub struct ListItem {
    src: String,
    label: String,
    state: LoadState,
    active: bool,
    attachment: Attachment,
}

impl ListItem {
    #[must_use]
    pub fn new(src: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            label: label.into(),
            state: LoadState::Idle,
            active: false,
            attachment: Attachment::Detached,
        }
    }

    /// Resolves the owning host and list. Runs the lookup only once.
    pub fn attach(&mut self, ancestry: &Ancestry) -> Option<Binding> {
        self.attachment.attach(ancestry, Capability::ListSurface)
    }

    #[must_use]
    pub fn binding(&self) -> Option<Binding> {
        self.attachment.binding()
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the displayed label. The asset reference is unchanged.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_loading(&mut self) {
        self.state = LoadState::Loaded;
    }

    /// Selection request for this row, or `None` while unbound.
    #[must_use]
    pub fn on_select(&self, position: usize) -> Option<Selection> {
        self.binding().map(|_| Selection {
            position,
            src: self.src.clone(),
        })
    }

    pub fn view<'a, M: Clone + 'a>(
        &'a self,
        position: usize,
        on_select: &dyn Fn(Selection) -> M,
    ) -> Element<'a, M> {
        let marker = match self.state {
            LoadState::Loaded => "●",
            LoadState::Loading => "○",
            LoadState::Idle => " ",
        };
        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(text(marker).size(typography::CAPTION))
            .push(text(&self.label).size(typography::BODY));

        let style = if self.active {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        let mut row = button(content)
            .width(Length::Fill)
            .padding(spacing::XXS)
            .style(style);
        if let Some(selection) = self.on_select(position) {
            row = row.on_press(on_select(selection));
        }
        row.into()
    }
}

/// Vertical list of [`ListItem`]s.
#[derive(Debug, Clone)]
pub struct ListSurface {
    ancestry: Ancestry,
    items: Vec<ListItem>,
    visible: bool,
}

impl ListSurface {
    /// Creates a list nested under `parent`.
    #[must_use]
    pub fn new(parent: &Ancestry, visible: bool) -> Self {
        let ancestry = match parent.nearest(Capability::ViewerHost) {
            Some(host) => parent.child(Owner::surface(Capability::ListSurface, host.viewer)),
            None => parent.clone(),
        };
        Self {
            ancestry,
            items: Vec::new(),
            visible,
        }
    }

    /// Chain handed to the children of this list.
    #[must_use]
    pub fn ancestry(&self) -> &Ancestry {
        &self.ancestry
    }

    /// Marks exactly the item at `index` active. Out-of-range clears all.
    pub fn activate(&mut self, index: PageIndex) {
        self.deactivate();
        if let Some(item) = usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get_mut(i))
        {
            item.active = true;
        }
    }

    pub fn deactivate(&mut self) {
        for item in &mut self.items {
            item.active = false;
        }
    }

    /// Marks the row at `position` as the one the user picked.
    pub fn select(&mut self, position: usize) {
        self.deactivate();
        if let Some(item) = self.items.get_mut(position) {
            item.active = true;
        }
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(ListItem::is_active)
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn child(&self, position: usize) -> Option<&ListItem> {
        self.items.get(position)
    }

    pub fn child_mut(&mut self, position: usize) -> Option<&mut ListItem> {
        self.items.get_mut(position)
    }

    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter()
    }

    pub fn view<'a, M: Clone + 'a>(&'a self, on_select: impl Fn(Selection) -> M) -> Element<'a, M> {
        if !self.visible {
            return Space::new().width(Length::Shrink).into();
        }

        let rows = self
            .items
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::XXS), |column, (position, item)| {
                column.push(item.view(position, &on_select))
            });

        scrollable(rows.padding(spacing::XXS))
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fill)
            .into()
    }
}

impl Container for ListSurface {
    fn append(&mut self, child: Component) -> bool {
        match child {
            Component::ListItem(mut item) => {
                item.attach(&self.ancestry);
                item.start_loading();
                self.items.push(item);
                true
            }
            other => component::reject("list-surface", &other),
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
