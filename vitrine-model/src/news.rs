use chrono::{DateTime, Utc};

use crate::exhibition::non_blank;
use crate::ids::NewsID;

/// A news post from the museum front page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct News {
    pub id: NewsID,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_at: Option<DateTime<Utc>>,
}

impl News {
    /// First attached image; the front page only ever shows one.
    pub fn first_image(&self) -> Option<&str> {
        self.image_urls.iter().find_map(|url| non_blank(url))
    }
}
