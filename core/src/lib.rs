pub mod catalog;
pub mod classify;
pub mod error;
pub mod models;
pub mod relative;
pub mod resolver;

pub use catalog::FreeGames;
pub use error::{FreebiesError, Result};
pub use models::Offer;
