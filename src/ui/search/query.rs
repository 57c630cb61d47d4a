// SPDX-License-Identifier: MPL-2.0
//! Search query model and its wire format.
//!
//! A query is serialized as a JSON object. `term` is always present; `theme`,
//! `sort` and `rowLimit` only when the user picked them.

use crate::config::DEFAULT_ROW_LIMIT;
use serde::{Serialize, Serializer};
use std::fmt;

/// Thematic collection filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Archaeology,
    Art,
    Fashion,
    Manuscript,
    Map,
    Migration,
    Music,
    Nature,
    Newspaper,
    Photography,
    Ww1,
}

impl Theme {
    pub const ALL: [Theme; 11] = [
        Theme::Archaeology,
        Theme::Art,
        Theme::Fashion,
        Theme::Manuscript,
        Theme::Map,
        Theme::Migration,
        Theme::Music,
        Theme::Nature,
        Theme::Newspaper,
        Theme::Photography,
        Theme::Ww1,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Archaeology => "archaeology",
            Theme::Art => "art",
            Theme::Fashion => "fashion",
            Theme::Manuscript => "manuscript",
            Theme::Map => "map",
            Theme::Migration => "migration",
            Theme::Music => "music",
            Theme::Nature => "nature",
            Theme::Newspaper => "newspaper",
            Theme::Photography => "photography",
            Theme::Ww1 => "ww1",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field the results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    TimestampCreated,
    TimestampUpdate,
    EuropeanaId,
    Completeness,
    IsFulltext,
    HasThumbnails,
    HasMedia,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::TimestampCreated,
        SortField::TimestampUpdate,
        SortField::EuropeanaId,
        SortField::Completeness,
        SortField::IsFulltext,
        SortField::HasThumbnails,
        SortField::HasMedia,
    ];

    /// Name of the field on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::TimestampCreated => "timestamp_created",
            SortField::TimestampUpdate => "timestamp_update",
            SortField::EuropeanaId => "europeana_id",
            SortField::Completeness => "COMPLETENESS",
            SortField::IsFulltext => "is_fulltext",
            SortField::HasThumbnails => "has_thumbnails",
            SortField::HasMedia => "has_media",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Sort clause, encoded as `"<field>+<asc|desc>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.field.as_str(), self.order.as_str())
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One search request. Built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<Sort>,
    #[serde(rename = "rowLimit", skip_serializing_if = "Option::is_none")]
    row_limit: Option<i64>,
}

impl SearchQuery {
    /// Starts a query with `term` as typed. `None` when `term` is empty.
    #[must_use]
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            theme: None,
            sort: None,
            row_limit: None,
        })
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some(Sort { field, order });
        self
    }

    #[must_use]
    pub fn with_row_limit(mut self, rows: i64) -> Self {
        self.row_limit = Some(coerce_row_limit(rows));
        self
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    #[must_use]
    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    #[must_use]
    pub fn row_limit(&self) -> Option<i64> {
        self.row_limit
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Negative limits fall back to the default; zero passes through.
#[must_use]
pub fn coerce_row_limit(rows: i64) -> i64 {
    if rows < 0 {
        DEFAULT_ROW_LIMIT
    } else {
        rows
    }
}

/// Reads the rows field. Empty or non-numeric input yields `None`.
#[must_use]
pub fn parse_row_limit(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.parse::<i64>() {
        Ok(rows) => Some(coerce_row_limit(rows)),
        Err(err) => {
            tracing::debug!(input, error = %err, "ignoring non-numeric row limit");
            None
        }
    }
}
