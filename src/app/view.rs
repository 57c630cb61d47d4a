// SPDX-License-Identifier: MPL-2.0
//! Workspace layout: toolbar, stacked viewers and the search modal on top.

use super::{Message, Workspace};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::search;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row, Space, Stack};
use iced::{Alignment, Element, Length};

pub fn view(workspace: &Workspace) -> Element<'_, Message> {
    let i18n = workspace.i18n();

    let toolbar = Row::new()
        .align_y(Alignment::Center)
        .spacing(spacing::SM)
        .push(text(i18n.tr("app-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("workspace-open-search")).size(typography::BODY))
                .on_press(Message::Search(search::Message::Open))
                .style(styles::button::unselected),
        );

    let viewers: Element<'_, Message> = if workspace.viewers().is_empty() {
        container(text(i18n.tr("workspace-empty")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    } else {
        workspace
            .viewers()
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, host| {
                let id = host.id();
                column.push(
                    container(
                        host.view(i18n)
                            .map(move |message| Message::Viewer(id, message)),
                    )
                    .style(styles::container::panel),
                )
            })
            .height(Length::Fill)
            .into()
    };

    let base = Column::new()
        .padding(spacing::SM)
        .spacing(spacing::SM)
        .push(container(toolbar).style(styles::container::panel).padding(spacing::XS))
        .push(viewers);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if workspace.search().is_open() {
        stack = stack.push(
            container(workspace.search().view(i18n).map(Message::Search))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .center_x(Length::Fill)
                .style(styles::overlay::backdrop),
        );
    }

    stack.into()
}
