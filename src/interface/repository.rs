use futures::stream::BoxStream;

use crate::FetchResult;

/// A trait for retrieving the cards displayed by the presentation layer.
#[cfg_attr(test, mockall::automock)]
pub trait CardsRepository: Sync + Send {
    /// Returns a lazy stream yielding exactly one fetch result.
    ///
    /// Nothing is fetched until the stream is polled. Failures are yielded as
    /// values, the stream never ends without a result.
    fn get_cards(&self) -> BoxStream<'static, FetchResult>;
}
