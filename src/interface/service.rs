use crate::{ApiCardsResponse, CardsRequest, StdResult};

/// A trait for fetching card records from a remote service.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CardsService: Sync + Send {
    /// Fetches the cards matching the request.
    async fn get_cards(&self, request: &CardsRequest) -> StdResult<ApiCardsResponse>;
}
