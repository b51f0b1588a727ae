//! Best-effort content loading for the museum pages.
//!
//! Pages render whatever arrived: a failed request is logged and shows up as
//! an empty list (or no exhibition), never as an error.

use async_trait::async_trait;
use tracing::warn;
use vitrine_model::{Exhibition, ExhibitionID, News};

use crate::infra::api_client::MuseumApiClient;

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn exhibitions(&self) -> Vec<Exhibition>;
    async fn exhibition(&self, id: &ExhibitionID) -> Option<Exhibition>;
    async fn news(&self) -> Vec<News>;
}

#[async_trait]
impl ContentSource for MuseumApiClient {
    async fn exhibitions(&self) -> Vec<Exhibition> {
        self.get_all_exhibitions().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load exhibitions");
            Vec::new()
        })
    }

    async fn exhibition(&self, id: &ExhibitionID) -> Option<Exhibition> {
        match self.get_exhibition_by_id(id).await {
            Ok(Some(exhibition)) => Some(exhibition),
            Ok(None) => {
                warn!(exhibition = %id, "Exhibition not found");
                None
            }
            Err(err) => {
                warn!(exhibition = %id, error = %err, "Failed to load exhibition");
                None
            }
        }
    }

    async fn news(&self) -> Vec<News> {
        self.get_all_news().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load news");
            Vec::new()
        })
    }
}
