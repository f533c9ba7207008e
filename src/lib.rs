//! Fetches a list of cards from a remote service and exposes the fetch
//! lifecycle as an observable view state.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
