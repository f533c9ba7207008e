use std::fmt::Display;

use super::ApiCard;

/// A card as displayed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The display name of the card.
    name: String,

    /// The URL of the card image.
    image_url: String,
}

impl Card {
    /// Creates a new `Card` instance.
    pub fn new(name: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Retrieves the card name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the card image URL.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl From<ApiCard> for Card {
    fn from(card: ApiCard) -> Self {
        Self {
            name: card.name,
            image_url: card.image_url,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card: {}, Image: {}", self.name, self.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_from_api_card_copies_fields() {
        let card: Card = ApiCard::new("Test Card", "http://www.image.com").into();

        assert_eq!(Card::new("Test Card", "http://www.image.com"), card);
        assert_eq!("Test Card", card.name());
        assert_eq!("http://www.image.com", card.image_url());
    }

    #[test]
    fn card_display_shows_name_and_image() {
        let card = Card::new("Test Card", "http://www.image.com");

        assert_eq!("Card: Test Card, Image: http://www.image.com", card.to_string());
    }
}
