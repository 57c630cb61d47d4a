// SPDX-License-Identifier: MPL-2.0
//! Result card: thumbnail, title, description and a launch button.

use super::result::SearchResult;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::net::HttpClient;
use crate::task::Deferred;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, container, text, Column};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    /// Fetch not finished yet.
    #[default]
    Pending,
    Ready(Handle),
    /// No thumbnail URL, or the fetch failed.
    Missing,
}

#[derive(Debug, Clone)]
pub struct SearchResultCard {
    result: SearchResult,
    thumbnail: Thumbnail,
}

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailFetched(Result<Vec<u8>>),
    Launch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenViewer { manifest_url: String },
}

impl SearchResultCard {
    #[must_use]
    pub fn new(result: SearchResult) -> Self {
        let thumbnail = if result.thumbnail_url().is_some() {
            Thumbnail::Pending
        } else {
            Thumbnail::Missing
        };
        Self { result, thumbnail }
    }

    #[must_use]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    #[must_use]
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// Background fetch of the thumbnail image, if the result has one.
    pub fn fetch_thumbnail(&self, http: &HttpClient) -> Deferred<Message> {
        let Some(url) = self.result.thumbnail_url().map(str::to_string) else {
            return Deferred::none();
        };
        let http = http.clone();
        Deferred::perform(
            async move { http.get_bytes(&url).await },
            Message::ThumbnailFetched,
        )
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ThumbnailFetched(Ok(bytes)) => {
                self.thumbnail = Thumbnail::Ready(Handle::from_bytes(bytes));
                Effect::None
            }
            Message::ThumbnailFetched(Err(err)) => {
                tracing::debug!(url = ?self.result.thumbnail_url(), error = %err, "thumbnail unavailable");
                self.thumbnail = Thumbnail::Missing;
                Effect::None
            }
            Message::Launch => Effect::OpenViewer {
                manifest_url: self.result.manifest_url().to_string(),
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let picture: Element<'a, Message> = match &self.thumbnail {
            Thumbnail::Ready(handle) => image::Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            Thumbnail::Pending => placeholder(String::new()),
            Thumbnail::Missing => placeholder(i18n.tr("search-card-no-thumbnail")),
        };

        let launch = button(text(i18n.tr("search-card-open")).size(typography::BODY_SM))
            .on_press(Message::Launch)
            .style(styles::button::selected);

        let body = Column::new()
            .spacing(spacing::XS)
            .push(picture)
            .push(text(self.result.title()).size(typography::TITLE_SM))
            .push(text(self.result.description()).size(typography::BODY_SM))
            .push(launch);

        container(body)
            .padding(spacing::SM)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(styles::container::card)
            .into()
    }
}

fn placeholder<'a>(caption: String) -> Element<'a, Message> {
    container(text(caption).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tile_pending)
        .into()
}
