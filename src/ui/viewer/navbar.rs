// SPDX-License-Identifier: MPL-2.0
//! Viewer navigation bar.
//!
//! Holds the menu (with `Close`), the list and icon toggles and the manifest
//! label. Toggle buttons are highlighted while their surface is visible.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub label: Option<&'a str>,
    pub list_highlighted: bool,
    pub icons_highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    Close,
    ToggleList,
    ToggleIcons,
}

/// Events propagated to the viewer host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    ToggleList,
    ToggleIcons,
}

pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Close => {
            *menu_open = false;
            Event::Close
        }
        Message::ToggleList => Event::ToggleList,
        Message::ToggleIcons => Event::ToggleIcons,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(text("≡").size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XXS)
        .style(if ctx.menu_open {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let list_button = toggle_button(ctx.i18n.tr("viewer-toggle-list"), ctx.list_highlighted)
        .on_press(Message::ToggleList);
    let icons_button = toggle_button(ctx.i18n.tr("viewer-toggle-icons"), ctx.icons_highlighted)
        .on_press(Message::ToggleIcons);

    let label = ctx
        .label
        .map_or_else(|| ctx.i18n.tr("viewer-untitled"), str::to_string);

    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(menu_button)
        .push(list_button)
        .push(icons_button)
        .push(text(label).size(typography::BODY));

    let mut content = Column::new().width(Length::Fill).push(
        container(bar)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::container::panel),
    );

    if ctx.menu_open {
        let close = button(text(ctx.i18n.tr("viewer-menu-close")).size(typography::BODY_SM))
            .on_press(Message::Close)
            .style(styles::button::unselected);
        content = content.push(container(close).padding(spacing::XS));
    }

    content.into()
}

fn toggle_button<'a>(label: String, highlighted: bool) -> iced::widget::Button<'a, Message> {
    button(text(label).size(typography::BODY_SM))
        .padding(spacing::XXS)
        .style(if highlighted {
            styles::button::selected
        } else {
            styles::button::unselected
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_open_and_closed() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(open);
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn close_shuts_menu_and_propagates() {
        let mut open = true;
        assert_eq!(update(Message::Close, &mut open), Event::Close);
        assert!(!open);
    }

    #[test]
    fn surface_toggles_propagate() {
        let mut open = false;
        assert_eq!(update(Message::ToggleList, &mut open), Event::ToggleList);
        assert_eq!(update(Message::ToggleIcons, &mut open), Event::ToggleIcons);
    }
}
