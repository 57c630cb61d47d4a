// SPDX-License-Identifier: MPL-2.0
//! Search results as returned by the search endpoint.

use crate::error::Result;
use serde::Deserialize;

/// One manifest found by a search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "manifestUrl", alias = "url")]
    manifest_url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "thumbnailUrl", alias = "thumbnail", default)]
    thumbnail_url: Option<String>,
}

impl SearchResult {
    #[must_use]
    pub fn new(
        manifest_url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail_url: Option<String>,
    ) -> Self {
        Self {
            manifest_url: manifest_url.into(),
            title: title.into(),
            description: description.into(),
            thumbnail_url,
        }
    }

    #[must_use]
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Thumbnail URL, ignoring blank values.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Response {
    List(Vec<SearchResult>),
    Wrapped { results: Vec<SearchResult> },
}

/// Parses a response body into results, in response order.
pub fn parse_results(body: &str) -> Result<Vec<SearchResult>> {
    let results = match serde_json::from_str::<Response>(body)? {
        Response::List(results) | Response::Wrapped { results } => results,
    };
    Ok(results)
}
