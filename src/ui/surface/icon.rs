// SPDX-License-Identifier: MPL-2.0
//! Page thumbnails: a grid of tiles, hidden until toggled.

use super::{LoadState, Selection};
use crate::binding::{Ancestry, Attachment, Binding, Capability, Owner};
use crate::ui::component::{self, Component, Container};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{alignment, Element, Length};

const TILES_PER_ROW: usize = 4;
const TILE_SIZE: f32 = sizing::ICON_XXL * 1.5;

/// One tile of the thumbnail grid.
#[derive(Debug, Clone)]
pub struct IconItem {
    src: String,
    label: String,
    state: LoadState,
    attachment: Attachment,
}

impl IconItem {
    #[must_use]
    pub fn new(src: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            label: label.into(),
            state: LoadState::Idle,
            attachment: Attachment::Detached,
        }
    }

    /// Resolves the owning host and icon surface. Runs the lookup only once.
    pub fn attach(&mut self, ancestry: &Ancestry) -> Option<Binding> {
        self.attachment.attach(ancestry, Capability::IconSurface)
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

    pub fn start_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_loading(&mut self) {
        self.state = LoadState::Loaded;
    }

    /// Selection request for this tile, or `None` while unbound.
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
        let caption = text(&self.label).size(typography::CAPTION);
        let face = container(caption)
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .style(if self.is_loaded() {
                styles::container::tile_loaded
            } else {
                styles::container::tile_pending
            });

        let mut tile = button(face).padding(0).style(styles::button::unselected);
        if let Some(selection) = self.on_select(position) {
            tile = tile.on_press(on_select(selection));
        }
        tile.into()
    }
}

/// Grid of [`IconItem`]s.
///
/// Unlike the list, the grid has no active marker.
#[derive(Debug, Clone)]
pub struct IconSurface {
    ancestry: Ancestry,
    items: Vec<IconItem>,
    visible: bool,
}

impl IconSurface {
    /// Creates a grid nested under `parent`.
    #[must_use]
    pub fn new(parent: &Ancestry, visible: bool) -> Self {
        let ancestry = match parent.nearest(Capability::ViewerHost) {
            Some(host) => parent.child(Owner::surface(Capability::IconSurface, host.viewer)),
            None => parent.clone(),
        };
        Self {
            ancestry,
            items: Vec::new(),
            visible,
        }
    }

    #[must_use]
    pub fn ancestry(&self) -> &Ancestry {
        &self.ancestry
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
    pub fn child(&self, position: usize) -> Option<&IconItem> {
        self.items.get(position)
    }

    pub fn child_mut(&mut self, position: usize) -> Option<&mut IconItem> {
        self.items.get_mut(position)
    }

    pub fn items(&self) -> impl Iterator<Item = &IconItem> {
        self.items.iter()
    }

    pub fn view<'a, M: Clone + 'a>(&'a self, on_select: impl Fn(Selection) -> M) -> Element<'a, M> {
        if !self.visible {
            return Space::new().width(Length::Shrink).into();
        }

        let mut grid = Column::new().spacing(spacing::XS);
        for (chunk_index, chunk) in self.items.chunks(TILES_PER_ROW).enumerate() {
            let row = chunk
                .iter()
                .enumerate()
                .fold(Row::new().spacing(spacing::XS), |row, (offset, item)| {
                    row.push(item.view(chunk_index * TILES_PER_ROW + offset, &on_select))
                });
            grid = grid.push(row);
        }

        scrollable(grid.padding(spacing::XS))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl Container for IconSurface {
    fn append(&mut self, child: Component) -> bool {
        match child {
            Component::IconItem(mut item) => {
                item.attach(&self.ancestry);
                item.start_loading();
                self.items.push(item);
                true
            }
            other => component::reject("icon-surface", &other),
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
