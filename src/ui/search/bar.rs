// SPDX-License-Identifier: MPL-2.0
//! Search bar: term field plus an optional details panel.

use super::query::{parse_row_limit, SearchQuery, SortField, SortOrder, Theme};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, radio, text, text_input, toggler, Column, Row};
use iced::{Alignment, Element, Length};
use std::fmt;

/// Pick-list entry whose display text is localized separately from its value.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    value: Option<T>,
    label: String,
}

impl<T: PartialEq> PartialEq for Choice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn choices<T: Copy + fmt::Display>(none_label: String, values: &[T]) -> Vec<Choice<T>> {
    std::iter::once(Choice {
        value: None,
        label: none_label,
    })
    .chain(values.iter().map(|value| Choice {
        value: Some(*value),
        label: value.to_string(),
    }))
    .collect()
}

#[derive(Debug, Clone)]
pub struct State {
    term: String,
    details_visible: bool,
    theme: Option<Theme>,
    sort_field: Option<SortField>,
    sort_order: SortOrder,
    rows: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    TermChanged(String),
    DetailsToggled(bool),
    ThemeSelected(Option<Theme>),
    SortFieldSelected(Option<SortField>),
    SortOrderSelected(SortOrder),
    RowsChanged(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Search(SearchQuery),
}

impl State {
    /// New bar with the rows field pre-filled with `rows`.
    #[must_use]
    pub fn new(rows: impl Into<String>) -> Self {
        Self {
            term: String::new(),
            details_visible: false,
            theme: None,
            sort_field: None,
            sort_order: SortOrder::Ascending,
            rows: rows.into(),
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::TermChanged(term) => self.term = term,
            Message::DetailsToggled(visible) => self.details_visible = visible,
            Message::ThemeSelected(theme) => self.theme = theme,
            Message::SortFieldSelected(field) => self.sort_field = field,
            Message::SortOrderSelected(order) => self.sort_order = order,
            Message::RowsChanged(rows) => self.rows = rows,
            Message::Submit => {
                return self.search().map_or(Effect::None, Effect::Search);
            }
        }
        Effect::None
    }

    /// Builds the query from the current fields. `None` for an empty term.
    #[must_use]
    pub fn search(&self) -> Option<SearchQuery> {
        let mut query = SearchQuery::new(&self.term)?;
        if let Some(theme) = self.theme {
            query = query.with_theme(theme);
        }
        if let Some(field) = self.sort_field {
            query = query.with_sort(field, self.sort_order);
        }
        if let Some(rows) = parse_row_limit(&self.rows) {
            query = query.with_row_limit(rows);
        }
        Some(query)
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let field = text_input(&i18n.tr("search-field-placeholder"), &self.term)
            .on_input(Message::TermChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .width(Length::Fill);

        let details_switch = toggler(self.details_visible)
            .label(i18n.tr("search-show-details"))
            .on_toggle(Message::DetailsToggled)
            .text_size(typography::BODY_SM);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .push(field)
            .push(details_switch);

        if self.details_visible {
            content = content.push(self.details(i18n));
        }

        content.into()
    }

    fn details<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let none = i18n.tr("search-option-none");

        let theme_options = choices(none.clone(), &Theme::ALL);
        let theme_selected = theme_options
            .iter()
            .find(|choice| choice.value == self.theme)
            .cloned();
        let theme_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(text(i18n.tr("search-theme-label")).size(typography::BODY_SM))
            .push(pick_list(theme_options, theme_selected, |choice: Choice<Theme>| {
                Message::ThemeSelected(choice.value)
            }));

        let sort_options = choices(none, &SortField::ALL);
        let sort_selected = sort_options
            .iter()
            .find(|choice| choice.value == self.sort_field)
            .cloned();
        let sort_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(text(i18n.tr("search-sort-label")).size(typography::BODY_SM))
            .push(pick_list(sort_options, sort_selected, |choice: Choice<SortField>| {
                Message::SortFieldSelected(choice.value)
            }));

        let order_row = Row::new()
            .spacing(spacing::MD)
            .push(radio(
                i18n.tr("search-order-ascending"),
                SortOrder::Ascending,
                Some(self.sort_order),
                Message::SortOrderSelected,
            ))
            .push(radio(
                i18n.tr("search-order-descending"),
                SortOrder::Descending,
                Some(self.sort_order),
                Message::SortOrderSelected,
            ));

        let rows_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(text(i18n.tr("search-rows-label")).size(typography::BODY_SM))
            .push(
                text_input("", &self.rows)
                    .on_input(Message::RowsChanged)
                    .on_submit(Message::Submit)
                    .width(Length::Fixed(80.0)),
            );

        let search_button = button(text(i18n.tr("search-button")))
            .on_press(Message::Submit)
            .style(styles::button::selected);

        Column::new()
            .spacing(spacing::XS)
            .push(theme_row)
            .push(sort_row)
            .push(order_row)
            .push(rows_row)
            .push(search_button)
            .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ROWS_INPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(term: &str) -> State {
        let mut state = State::default();
        state.handle(Message::TermChanged(term.to_string()));
        state
    }

    #[test]
    fn submit_with_empty_term_emits_nothing() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Submit), Effect::None);
    }

    #[test]
    fn submit_emits_query_with_default_rows() {
        let mut state = typed("ukiyo-e");
        match state.handle(Message::Submit) {
            Effect::Search(query) => {
                assert_eq!(query.term(), "ukiyo-e");
                assert_eq!(query.row_limit(), Some(10));
                assert!(query.theme().is_none());
                assert!(query.sort().is_none());
            }
            Effect::None => panic!("expected a search"),
        }
    }

    #[test]
    fn cleared_rows_field_omits_row_limit() {
        let mut state = typed("scroll");
        state.handle(Message::RowsChanged(String::new()));
        assert_eq!(state.search().unwrap().row_limit(), None);
    }

    #[test]
    fn sort_order_only_applies_with_a_field() {
        let mut state = typed("scroll");
        state.handle(Message::SortOrderSelected(SortOrder::Descending));
        assert!(state.search().unwrap().sort().is_none());

        state.handle(Message::SortFieldSelected(Some(SortField::HasMedia)));
        assert_eq!(
            state.search().unwrap().sort().map(|sort| sort.to_string()),
            Some("has_media+desc".to_string())
        );
    }

    #[test]
    fn selecting_none_clears_theme() {
        let mut state = typed("scroll");
        state.handle(Message::ThemeSelected(Some(Theme::Art)));
        state.handle(Message::ThemeSelected(None));
        assert!(state.search().unwrap().theme().is_none());
    }

    #[test]
    fn choices_lead_with_none() {
        let options = choices("-".to_string(), &Theme::ALL);
        assert_eq!(options.len(), Theme::ALL.len() + 1);
        assert!(options[0].value.is_none());
        assert_eq!(options[1].to_string(), "archaeology");
    }
}
