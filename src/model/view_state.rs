use super::{Card, DomainError, FetchResult};

/// A lifecycle event of a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// The fetch has started, no result is available yet.
    Started,

    /// The fetch has completed with a result.
    Completed(FetchResult),
}

/// The state observed by the presentation layer.
///
/// The fields are not coupled: each lifecycle transition sets them explicitly.
/// A failure leaves `cards` untouched, so the cards of a previous successful
/// fetch are still held while `show_content` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// The cards of the last successful fetch.
    pub cards: Vec<Card>,

    /// Whether the content should be displayed.
    pub show_content: bool,

    /// Whether the loading indicator should be displayed.
    pub show_loading: bool,

    /// The error message of the last failed fetch.
    pub error: Option<String>,
}

impl ViewState {
    /// Applies a fetch lifecycle event.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Started => self.on_start(),
            FetchEvent::Completed(Ok(cards)) => self.on_success(cards),
            FetchEvent::Completed(Err(error)) => self.on_failure(&error),
        }
    }

    /// Transition when a fetch starts.
    pub fn on_start(&mut self) {
        self.show_content = false;
        self.show_loading = true;
        self.error = None;
    }

    /// Transition when a fetch fails.
    pub fn on_failure(&mut self, error: &DomainError) {
        self.show_content = false;
        self.show_loading = false;
        self.error = Some(error.message());
    }

    /// Transition when a fetch succeeds.
    pub fn on_success(&mut self, cards: Vec<Card>) {
        self.show_content = true;
        self.show_loading = false;
        self.error = None;
        self.cards = cards;
    }

    /// Whether the state is loading.
    pub fn is_loading(&self) -> bool {
        self.show_loading
    }

    /// Whether the state has settled on a result, either content or error.
    pub fn is_settled(&self) -> bool {
        !self.show_loading && (self.show_content || self.error.is_some())
    }
}
