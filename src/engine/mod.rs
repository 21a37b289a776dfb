pub mod search;

pub use search::{SearchConfig, SearchEngine, SearchTicket};

use crate::recipe::Recipe;

/// How a search request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Suggestions are ready.
    Ready(Vec<Recipe>),
    /// The generator failed; carries its error text.
    Failed(String),
    /// A newer request started first, or the request was cancelled.
    Superseded,
}
