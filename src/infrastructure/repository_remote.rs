use std::sync::Arc;

use futures::{
    StreamExt,
    stream::{self, BoxStream},
};
use log::{debug, info, warn};

use crate::{
    Card, CardsRepository, CardsRequest, CardsService, DomainError, FetchResult, ServiceError,
};

/// A cards repository backed by a remote cards service.
///
/// Every stream returned by [`CardsRepository::get_cards`] performs exactly one
/// service call when polled. There is no caching and no retry.
pub struct RemoteCardsRepository {
    /// The remote cards service
    service: Arc<dyn CardsService>,

    /// The request forwarded to the service
    request: CardsRequest,
}

impl RemoteCardsRepository {
    /// Creates a new `RemoteCardsRepository` instance with the given service.
    pub fn new(service: Arc<dyn CardsService>) -> Self {
        Self::with_request(service, CardsRequest::default())
    }

    /// Creates a new `RemoteCardsRepository` forwarding the given request to the service.
    pub fn with_request(service: Arc<dyn CardsService>, request: CardsRequest) -> Self {
        Self { service, request }
    }

    async fn fetch(service: Arc<dyn CardsService>, request: CardsRequest) -> FetchResult {
        debug!("Fetching cards: {request}");
        match service.get_cards(&request).await {
            Ok(response) => {
                let cards = response
                    .into_cards()
                    .into_iter()
                    .map(Card::from)
                    .collect::<Vec<_>>();
                info!("Fetched {} cards", cards.len());

                Ok(cards)
            }
            Err(e) => {
                let error = Self::classify_error(&e);
                warn!("Failed to fetch cards ({error:?}): {e:#}");

                Err(error)
            }
        }
    }

    fn classify_error(error: &anyhow::Error) -> DomainError {
        let message = Some(error.to_string()).filter(|message| !message.is_empty());
        if Self::is_network_error(error) {
            DomainError::Network(message)
        } else {
            DomainError::Generic(message)
        }
    }

    fn is_network_error(error: &anyhow::Error) -> bool {
        error.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<ServiceError>(),
                Some(ServiceError::Network { .. })
            ) || cause.is::<std::io::Error>()
                || cause
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(|e| e.is_connect() || e.is_timeout() || e.is_request())
        })
    }
}

impl CardsRepository for RemoteCardsRepository {
    fn get_cards(&self) -> BoxStream<'static, FetchResult> {
        let service = Arc::clone(&self.service);
        let request = self.request.clone();

        stream::once(Self::fetch(service, request)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use anyhow::{Context, anyhow};
    use mockall::predicate::eq;

    use crate::{ApiCard, ApiCardsResponse, MockCardsService};

    use super::*;

    async fn collect_results(repository: &RemoteCardsRepository) -> Vec<FetchResult> {
        repository.get_cards().collect::<Vec<_>>().await
    }

    #[tokio::test]
    async fn get_cards_returns_domain_models() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| {
                    Ok(ApiCardsResponse::new(vec![
                        ApiCard::new("Test Card", "http://www.image.com"),
                        ApiCard::new("Test Card 2", "http://www.image.org"),
                    ]))
                })
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(
            vec![Ok(vec![
                Card::new("Test Card", "http://www.image.com"),
                Card::new("Test Card 2", "http://www.image.org"),
            ])],
            results
        );
    }

    #[tokio::test]
    async fn get_cards_returns_empty_list_when_service_returns_no_cards() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| Ok(ApiCardsResponse::new(vec![])))
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(vec![Ok(vec![])], results);
    }

    #[tokio::test]
    async fn get_cards_returns_network_error_when_service_fails_with_io_error() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| Err(io::Error::new(io::ErrorKind::ConnectionReset, "").into()))
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(vec![Err(DomainError::Network(None))], results);
    }

    #[tokio::test]
    async fn get_cards_returns_network_error_when_io_error_is_wrapped() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| {
                    Err(io::Error::new(io::ErrorKind::TimedOut, "timed out"))
                        .with_context(|| "Cards API unreachable")
                })
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(
            vec![Err(DomainError::Network(Some(
                "Cards API unreachable".to_string()
            )))],
            results
        );
    }

    #[tokio::test]
    async fn get_cards_returns_network_error_when_service_reports_network_error() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| Err(ServiceError::network("connection refused").into()))
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(
            vec![Err(DomainError::Network(Some(
                "Network error: connection refused".to_string()
            )))],
            results
        );
    }

    #[tokio::test]
    async fn classify_error_reports_raw_connect_error_as_network_error() {
        let error = reqwest::Client::new()
            .get("http://127.0.0.1:1/v1/cards")
            .send()
            .await
            .expect_err("Expected a connect error");

        let error = RemoteCardsRepository::classify_error(&error.into());

        assert!(error.is_network());
    }

    #[tokio::test]
    async fn get_cards_returns_generic_error_when_service_fails_with_other_error() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| Err(anyhow!("unexpected failure")))
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(
            vec![Err(DomainError::Generic(Some(
                "unexpected failure".to_string()
            )))],
            results
        );
    }

    #[tokio::test]
    async fn get_cards_returns_generic_error_when_service_fails_to_decode() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| Err(ServiceError::Decode("missing field".to_string()).into()))
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let results = collect_results(&repository).await;

        assert_eq!(1, results.len());
        assert!(matches!(results[0], Err(DomainError::Generic(Some(_)))));
    }

    #[tokio::test]
    async fn get_cards_forwards_request_to_service() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .with(eq(CardsRequest::new(Some(3), Some(50))))
                .returning(|_| Ok(ApiCardsResponse::default()))
                .times(1);

            service
        };
        let repository = RemoteCardsRepository::with_request(
            Arc::new(service),
            CardsRequest::new(Some(3), Some(50)),
        );

        collect_results(&repository).await;
    }

    #[tokio::test]
    async fn get_cards_is_lazy() {
        let service = {
            let mut service = MockCardsService::new();
            service.expect_get_cards().never();

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        let stream = repository.get_cards();
        drop(stream);
    }

    #[tokio::test]
    async fn each_stream_calls_service_again() {
        let service = {
            let mut service = MockCardsService::new();
            service
                .expect_get_cards()
                .returning(|_| Ok(ApiCardsResponse::default()))
                .times(2);

            service
        };
        let repository = RemoteCardsRepository::new(Arc::new(service));

        collect_results(&repository).await;
        collect_results(&repository).await;
    }
}
