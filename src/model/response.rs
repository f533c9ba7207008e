use serde::Deserialize;

/// A card record as returned by the cards service.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiCard {
    /// The display name of the card.
    pub(crate) name: String,

    /// The URL of the card image.
    #[serde(rename = "imageUrl")]
    pub(crate) image_url: String,
}

impl ApiCard {
    /// Creates a new `ApiCard` instance.
    pub fn new(name: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

/// A response containing the list of cards.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCardsResponse {
    /// Retrieved cards
    pub(crate) cards: Vec<ApiCard>,
}

impl ApiCardsResponse {
    /// Creates a new `ApiCardsResponse` instance with the given cards.
    pub fn new(cards: Vec<ApiCard>) -> Self {
        Self { cards }
    }

    /// Consumes the response and returns its cards.
    pub fn into_cards(self) -> Vec<ApiCard> {
        self.cards
    }
}
