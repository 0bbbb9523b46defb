pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod models;
pub mod page;
pub mod render;

pub use client::{HttpSearchClient, SearchBackend};
pub use controller::{SearchController, SearchOutcome, UiEvent};
pub use error::SearchError;
pub use models::{ResultItem, SearchResponse};
pub use page::SearchPage;
