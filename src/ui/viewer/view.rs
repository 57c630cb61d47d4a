// SPDX-License-Identifier: MPL-2.0
//! Layout of a viewer host: navbar above, list beside the drawing surface,
//! icon grid and progress overlay stacked over it.

use super::canvas::{DrawingSurface, Pointer};
use super::{navbar, Message, ViewerHost};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::widgets::ProgressBar;
use iced::widget::{container, Canvas, Column, Row, Space, Stack};
use iced::{Element, Length};

pub fn view<'a>(host: &'a ViewerHost, i18n: &'a I18n) -> Element<'a, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n,
        menu_open: host.menu_open(),
        label: host.label(),
        list_highlighted: host.list_highlighted(),
        icons_highlighted: host.icons_highlighted(),
    })
    .map(Message::Nav);

    let surface: Element<'a, Pointer> = Canvas::new(DrawingSurface::new(host.engine()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface.map(Message::Pointer));

    if host.icons().is_visible() {
        stack = stack.push(
            container(host.icons().view(Message::IconSelected))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        );
    }

    if host.progress().is_visible() {
        stack = stack.push(progress_overlay(host.progress().phase()));
    }

    let body = Row::new()
        .spacing(spacing::XS)
        .height(Length::Fill)
        .push(host.list().view(Message::ListSelected))
        .push(stack);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(body)
        .into()
}

fn progress_overlay<'a>(phase: f32) -> Element<'a, Message> {
    // Centered at half the surface width: 1 + 2 + 1 portions.
    let bar = container(ProgressBar::new(phase).into_element())
        .width(Length::FillPortion(2))
        .style(styles::overlay::progress_track);

    let row = Row::new()
        .push(Space::new().width(Length::FillPortion(1)))
        .push(bar)
        .push(Space::new().width(Length::FillPortion(1)));

    container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .center_y(Length::Fill)
        .into()
}
