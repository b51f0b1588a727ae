use chrono::{DateTime, Utc};

use crate::ids::{ExhibitID, ExhibitionID};

/// A themed collection of exhibits.
///
/// The list endpoint returns exhibitions without their exhibits; the detail
/// endpoint fills `exhibits`. Older API builds serialize that list under the
/// field name `Exhibit`, so both spellings are accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exhibition {
    pub id: ExhibitionID,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "Exhibit", deserialize_with = "null_as_empty")
    )]
    pub exhibits: Vec<Exhibit>,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "CreatedAt", skip_serializing_if = "Option::is_none")
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Exhibition {
    /// Description to show on a card, `None` when the curator left it blank.
    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }
}

/// A single object on display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exhibit {
    pub id: ExhibitID,
    pub exhibition_id: ExhibitionID,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: String,
}

impl Exhibit {
    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }
}

pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(feature = "serde")]
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_exhibit_field_name() {
        let raw = r#"{
            "id": "0192f0a4-8d7b-7c3e-a1b2-3c4d5e6f7a8b",
            "title": "Lyceum history",
            "description": "",
            "Exhibit": [{
                "id": "0192f0a4-8d7b-7c3e-a1b2-3c4d5e6f7a8c",
                "exhibition_id": "0192f0a4-8d7b-7c3e-a1b2-3c4d5e6f7a8b",
                "title": "School bell",
                "description": "Rung for the first time in 1976",
                "image_url": "/img/bell.jpg"
            }]
        }"#;

        let exhibition: Exhibition = serde_json::from_str(raw).unwrap();
        assert_eq!(exhibition.exhibits.len(), 1);
        assert_eq!(exhibition.description(), None);
        assert_eq!(exhibition.exhibits[0].image_url(), Some("/img/bell.jpg"));
    }

    #[test]
    fn null_exhibit_list_is_empty() {
        let raw = r#"{
            "id": "0192f0a4-8d7b-7c3e-a1b2-3c4d5e6f7a8b",
            "title": "Veterans",
            "exhibits": null
        }"#;

        let exhibition: Exhibition = serde_json::from_str(raw).unwrap();
        assert!(exhibition.exhibits.is_empty());
        assert!(exhibition.created_at.is_none());
    }
}
