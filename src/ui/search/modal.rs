// SPDX-License-Identifier: MPL-2.0
//! Search modal: the search bar, request submission and the card deck.

use super::bar;
use super::card::{self, SearchResultCard};
use super::query::SearchQuery;
use super::result::{parse_results, SearchResult};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::net::HttpClient;
use crate::task::Deferred;
use crate::ui::component::{self, Component, Container};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

/// Ordered collection of result cards.
#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    cards: Vec<SearchResultCard>,
}

impl CardDeck {
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SearchResultCard> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SearchResultCard> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResultCard> {
        self.cards.iter()
    }
}

impl Container for CardDeck {
    fn append(&mut self, child: Component) -> bool {
        match child {
            Component::SearchCard(card) => {
                self.cards.push(card);
                true
            }
            other => component::reject("card-deck", &other),
        }
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}

#[derive(Debug, Clone)]
pub struct SearchModal {
    bar: bar::State,
    deck: CardDeck,
    open: bool,
    endpoint: Option<String>,
    http: HttpClient,
    /// Bumped on every submission so late responses of older searches are ignored.
    generation: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Close,
    Bar(bar::Message),
    ResultsReceived {
        generation: u64,
        results: Result<Vec<SearchResult>>,
    },
    Card {
        generation: u64,
        index: usize,
        message: card::Message,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenViewer { manifest_url: String },
}

impl SearchModal {
    #[must_use]
    pub fn new(config: &SearchConfig, http: HttpClient) -> Self {
        Self {
            bar: bar::State::new(config.rows_input()),
            deck: CardDeck::default(),
            open: false,
            endpoint: config.endpoint().map(str::to_string),
            http,
            generation: 0,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn bar(&self) -> &bar::State {
        &self.bar
    }

    #[must_use]
    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn update(&mut self, message: Message) -> (Effect, Deferred<Message>) {
        match message {
            Message::Open => {
                self.open = true;
                (Effect::None, Deferred::none())
            }
            Message::Close => {
                self.open = false;
                (Effect::None, Deferred::none())
            }
            Message::Bar(message) => match self.bar.handle(message) {
                bar::Effect::Search(query) => (Effect::None, self.submit(query)),
                bar::Effect::None => (Effect::None, Deferred::none()),
            },
            Message::ResultsReceived {
                generation,
                results,
            } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "dropping stale results");
                    return (Effect::None, Deferred::none());
                }
                match results {
                    Ok(results) => (Effect::None, self.show_results(results)),
                    Err(err) => {
                        tracing::debug!(error = %err, "search failed");
                        (Effect::None, Deferred::none())
                    }
                }
            }
            Message::Card {
                generation,
                index,
                message,
            } => {
                if generation != self.generation {
                    return (Effect::None, Deferred::none());
                }
                let Some(card) = self.deck.get_mut(index) else {
                    return (Effect::None, Deferred::none());
                };
                match card.handle(message) {
                    card::Effect::OpenViewer { manifest_url } => {
                        (Effect::OpenViewer { manifest_url }, Deferred::none())
                    }
                    card::Effect::None => (Effect::None, Deferred::none()),
                }
            }
        }
    }

    fn submit(&mut self, query: SearchQuery) -> Deferred<Message> {
        let Some(endpoint) = self.endpoint.clone() else {
            tracing::debug!(term = query.term(), "no search endpoint configured");
            return Deferred::none();
        };

        self.generation += 1;
        let generation = self.generation;
        tracing::debug!(term = query.term(), generation, "submitting search");

        let http = self.http.clone();
        Deferred::perform(
            async move {
                let body = http.post_json(&endpoint, &query).await?;
                parse_results(&body)
            },
            move |results| Message::ResultsReceived {
                generation,
                results,
            },
        )
    }

    fn show_results(&mut self, results: Vec<SearchResult>) -> Deferred<Message> {
        self.deck.clear();
        let generation = self.generation;
        let mut fetches = Deferred::none();

        for result in results {
            let card = SearchResultCard::new(result);
            let index = self.deck.len();
            fetches.extend(card.fetch_thumbnail(&self.http).map(move |message| {
                Message::Card {
                    generation,
                    index,
                    message,
                }
            }));
            self.deck.append(card.into());
        }

        tracing::debug!(cards = self.deck.len(), "search results shown");
        fetches
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Row::new()
            .align_y(Alignment::Center)
            .push(text(i18n.tr("search-modal-title")).size(typography::TITLE_MD))
            .push(Space::new().width(Length::Fill))
            .push(
                button(text("×"))
                    .on_press(Message::Close)
                    .style(styles::button::unselected),
            );

        let generation = self.generation;
        let mut cards = Row::new().spacing(spacing::SM);
        for (index, card) in self.deck.iter().enumerate() {
            cards = cards.push(card.view(i18n).map(move |message| Message::Card {
                generation,
                index,
                message,
            }));
        }

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(self.bar.view(i18n).map(Message::Bar))
            .push(scrollable(cards.wrap()).height(Length::Fill));

        container(content)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .height(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::ListItem;

    fn http() -> HttpClient {
        HttpClient::new(&SearchConfig::default()).unwrap()
    }

    fn modal_with_endpoint() -> SearchModal {
        let config = SearchConfig {
            endpoint: Some("http://127.0.0.1:9/search".to_string()),
            ..SearchConfig::default()
        };
        SearchModal::new(&config, http())
    }

    fn sample_results() -> Vec<SearchResult> {
        vec![
            SearchResult::new("https://example.org/a/manifest.json", "A", "", None),
            SearchResult::new(
                "https://example.org/b/manifest.json",
                "B",
                "",
                Some("https://example.org/b/thumb.jpg".to_string()),
            ),
        ]
    }

    #[test]
    fn empty_term_sends_no_request() {
        let mut modal = modal_with_endpoint();
        let (effect, work) = modal.update(Message::Bar(bar::Message::Submit));
        assert_eq!(effect, Effect::None);
        assert!(work.is_empty());
    }

    #[test]
    fn missing_endpoint_sends_no_request() {
        let mut modal = SearchModal::new(&SearchConfig::default(), http());
        let _ = modal.update(Message::Bar(bar::Message::TermChanged("edo".into())));
        let (_, work) = modal.update(Message::Bar(bar::Message::Submit));
        assert!(work.is_empty());
    }

    #[test]
    fn submit_with_term_schedules_request() {
        let mut modal = modal_with_endpoint();
        let _ = modal.update(Message::Bar(bar::Message::TermChanged("edo".into())));
        let (_, work) = modal.update(Message::Bar(bar::Message::Submit));
        assert_eq!(work.len(), 1);
    }

    #[test]
    fn results_become_cards_and_thumbnails_are_fetched() {
        let mut modal = modal_with_endpoint();
        let _ = modal.update(Message::Bar(bar::Message::TermChanged("edo".into())));
        let _ = modal.update(Message::Bar(bar::Message::Submit));

        let (_, fetches) = modal.update(Message::ResultsReceived {
            generation: 1,
            results: Ok(sample_results()),
        });

        assert_eq!(modal.deck().len(), 2);
        assert_eq!(fetches.len(), 1);
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut modal = modal_with_endpoint();
        let _ = modal.update(Message::Bar(bar::Message::TermChanged("edo".into())));
        let _ = modal.update(Message::Bar(bar::Message::Submit));
        let _ = modal.update(Message::Bar(bar::Message::Submit));

        let _ = modal.update(Message::ResultsReceived {
            generation: 1,
            results: Ok(sample_results()),
        });
        assert!(modal.deck().is_empty());
    }

    #[test]
    fn failed_search_leaves_deck_untouched() {
        let mut modal = modal_with_endpoint();
        let _ = modal.update(Message::Bar(bar::Message::TermChanged("edo".into())));
        let _ = modal.update(Message::Bar(bar::Message::Submit));
        let (effect, work) = modal.update(Message::ResultsReceived {
            generation: 1,
            results: Err(crate::error::Error::Http("HTTP status: 500".into())),
        });
        assert_eq!(effect, Effect::None);
        assert!(work.is_empty());
        assert!(modal.deck().is_empty());
    }

    #[test]
    fn card_launch_bubbles_up_without_touching_modal() {
        let mut modal = modal_with_endpoint();
        let _ = modal.update(Message::Open);
        let _ = modal.update(Message::Bar(bar::Message::TermChanged("edo".into())));
        let _ = modal.update(Message::Bar(bar::Message::Submit));
        let _ = modal.update(Message::ResultsReceived {
            generation: 1,
            results: Ok(sample_results()),
        });

        let (effect, _) = modal.update(Message::Card {
            generation: 1,
            index: 1,
            message: card::Message::Launch,
        });

        assert_eq!(
            effect,
            Effect::OpenViewer {
                manifest_url: "https://example.org/b/manifest.json".to_string()
            }
        );
        assert!(modal.is_open());
        assert_eq!(modal.deck().len(), 2);
        assert_eq!(modal.bar().term(), "edo");
    }

    #[test]
    fn deck_rejects_non_card_components() {
        let mut deck = CardDeck::default();
        assert!(!deck.append(ListItem::new("a", "1").into()));
        assert!(deck.is_empty());
    }
}
