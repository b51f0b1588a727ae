//! Card content for the museum carousels.

use vitrine_model::{
    Exhibit, Exhibition, News,
    text::{format_long_date, truncate},
};

pub const NEWS_EXCERPT_CHARS: usize = 150;
pub const EXHIBIT_EXCERPT_CHARS: usize = 100;

pub const EXHIBITION_PLACEHOLDER: &str = "Exhibition description";
pub const EXHIBIT_PLACEHOLDER: &str = "Exhibit description";

pub const NO_EXHIBITIONS: &str = "No exhibitions have been added yet";
pub const NO_NEWS: &str = "No news yet";
pub const NO_EXHIBITS: &str = "This exhibition has no exhibits yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Exhibition,
    News,
    Exhibit,
}

impl CardKind {
    /// Text shown in place of an empty carousel of this kind.
    pub fn empty_message(self) -> &'static str {
        match self {
            CardKind::Exhibition => NO_EXHIBITIONS,
            CardKind::News => NO_NEWS,
            CardKind::Exhibit => NO_EXHIBITS,
        }
    }
}

/// One rendered card: everything a track needs to draw a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    /// Footer line, the publication date for news.
    pub caption: Option<String>,
    /// Detail page the card opens, if any.
    pub link: Option<String>,
}

impl From<&Exhibition> for Card {
    fn from(exhibition: &Exhibition) -> Self {
        Self {
            kind: CardKind::Exhibition,
            title: exhibition.title.clone(),
            body: exhibition
                .description()
                .unwrap_or(EXHIBITION_PLACEHOLDER)
                .to_string(),
            image_url: None,
            caption: None,
            link: Some(format!("exhibition.html?id={}", exhibition.id)),
        }
    }
}

impl From<&News> for Card {
    fn from(news: &News) -> Self {
        Self {
            kind: CardKind::News,
            title: news.title.clone(),
            body: truncate(&news.content, NEWS_EXCERPT_CHARS),
            image_url: news.first_image().map(str::to_string),
            caption: Some(format_long_date(&news.created_at)),
            link: None,
        }
    }
}

impl From<&Exhibit> for Card {
    fn from(exhibit: &Exhibit) -> Self {
        Self {
            kind: CardKind::Exhibit,
            title: exhibit.title.clone(),
            body: truncate(
                exhibit.description().unwrap_or(EXHIBIT_PLACEHOLDER),
                EXHIBIT_EXCERPT_CHARS,
            ),
            image_url: exhibit.image_url().map(str::to_string),
            caption: None,
            link: None,
        }
    }
}

pub fn exhibition_cards(exhibitions: &[Exhibition]) -> Vec<Card> {
    exhibitions.iter().map(Card::from).collect()
}

pub fn news_cards(news: &[News]) -> Vec<Card> {
    news.iter().map(Card::from).collect()
}

pub fn exhibit_cards(exhibition: &Exhibition) -> Vec<Card> {
    exhibition.exhibits.iter().map(Card::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vitrine_model::{ExhibitID, ExhibitionID, NewsID};

    fn news(content: &str, images: &[&str]) -> News {
        News {
            id: NewsID::new(),
            title: "Night at the museum".into(),
            content: content.into(),
            image_urls: images.iter().map(|s| s.to_string()).collect(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    fn exhibit(description: &str, image_url: &str) -> Exhibit {
        Exhibit {
            id: ExhibitID::new(),
            exhibition_id: ExhibitionID::new(),
            title: "Amphora".into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    #[test]
    fn news_card_truncates_content_and_formats_date() {
        let long = "a".repeat(200);
        let card = Card::from(&news(&long, &["", "/img/night.jpg"]));
        assert_eq!(card.body.chars().count(), NEWS_EXCERPT_CHARS + 3);
        assert!(card.body.ends_with("..."));
        assert_eq!(card.image_url.as_deref(), Some("/img/night.jpg"));
        assert_eq!(card.caption.as_deref(), Some("5 March 2024"));
    }

    #[test]
    fn short_news_is_kept_whole_without_image() {
        let card = Card::from(&news("Open late on Friday.", &[]));
        assert_eq!(card.body, "Open late on Friday.");
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn exhibition_card_falls_back_to_placeholder_and_links_detail() {
        let exhibition = Exhibition {
            id: ExhibitionID::new(),
            title: "Bronze Age".into(),
            description: "   ".into(),
            exhibits: Vec::new(),
            created_at: None,
        };
        let card = Card::from(&exhibition);
        assert_eq!(card.body, EXHIBITION_PLACEHOLDER);
        assert_eq!(
            card.link,
            Some(format!("exhibition.html?id={}", exhibition.id))
        );
    }

    #[test]
    fn exhibit_card_truncates_at_one_hundred_chars() {
        let card = Card::from(&exhibit(&"b".repeat(101), "/img/amphora.png"));
        assert_eq!(card.body, format!("{}...", "b".repeat(100)));
        assert_eq!(card.image_url.as_deref(), Some("/img/amphora.png"));

        let bare = Card::from(&exhibit("", ""));
        assert_eq!(bare.body, EXHIBIT_PLACEHOLDER);
        assert_eq!(bare.image_url, None);
    }

    #[test]
    fn exhibit_cards_follow_exhibition_order() {
        let exhibition = Exhibition {
            id: ExhibitionID::new(),
            title: "Bronze Age".into(),
            description: String::new(),
            exhibits: vec![exhibit("first", ""), exhibit("second", "")],
            created_at: None,
        };
        let bodies: Vec<_> = exhibit_cards(&exhibition)
            .into_iter()
            .map(|card| card.body)
            .collect();
        assert_eq!(bodies, ["first", "second"]);
    }
}
