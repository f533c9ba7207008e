use std::time::Duration;

use anyhow::Context;
use log::{debug, error};
use reqwest::{Client, StatusCode, header};

use crate::{ApiCardsResponse, CardsRequest, CardsService, ServiceError, StdResult};

/// The production endpoint of the cards API.
pub const CARDS_API_ENDPOINT: &str = "https://api.pokemontcg.io/v1/cards";

/// The default timeout of a cards API call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const MAX_BODY_PREVIEW_CHARS: usize = 256;

/// Fetches cards from an HTTP JSON API.
pub struct HttpCardsService {
    client: Client,
    endpoint: String,
}

impl HttpCardsService {
    /// Creates a new `HttpCardsService` for the given endpoint and request timeout.
    pub fn try_new(endpoint: &str, timeout: Duration) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    fn map_status_error(status: StatusCode, body: &str) -> ServiceError {
        ServiceError::Status {
            status: status.as_u16(),
            body: body.chars().take(MAX_BODY_PREVIEW_CHARS).collect(),
        }
    }
}

#[async_trait::async_trait]
impl CardsService for HttpCardsService {
    async fn get_cards(&self, request: &CardsRequest) -> StdResult<ApiCardsResponse> {
        debug!("GET {} with {request}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .query(request)
            .send()
            .await
            .map_err(ServiceError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ServiceError::from)?;
        if !status.is_success() {
            error!("Cards API responded with status {status}");
            return Err(Self::map_status_error(status, &body).into());
        }

        let cards_response = serde_json::from_str::<ApiCardsResponse>(&body)
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        Ok(cards_response)
    }
}
