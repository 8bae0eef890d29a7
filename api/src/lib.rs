pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod summary;
pub mod types;

pub use catalog::{load_free_games, CatalogSource, StubCatalog};
pub use client::CatalogClient;
pub use summary::{GeminiClient, Summarizer};
