use serde::{Deserialize, Deserializer};

use crate::error::{Result, SearchError};

/// Payload returned by `GET /search/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub enhanced_response: Option<String>,

    #[serde(default)]
    pub results: Option<Vec<ResultItem>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultItem {
    pub doc_id: String,
    /// Only read when there are no highlights.
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResponse {
    /// Turns a payload carrying a non-empty `error` into `SearchError::Server`.
    /// The error wins over any results or enhanced text in the same payload.
    pub fn into_result(self) -> Result<SearchResponse> {
        if let Some(message) = self.error.as_deref().filter(|m| !m.is_empty()) {
            return Err(SearchError::Server(message.to_string()));
        }
        Ok(self)
    }

    pub fn enhanced(&self) -> Option<&str> {
        self.enhanced_response.as_deref().filter(|s| !s.is_empty())
    }

    pub fn results(&self) -> &[ResultItem] {
        self.results.as_deref().unwrap_or_default()
    }
}

impl ResultItem {
    pub fn new(doc_id: impl Into<String>, text: impl Into<String>, highlights: Vec<String>) -> Self {
        ResultItem {
            doc_id: doc_id.into(),
            text: text.into(),
            highlights,
        }
    }
}
