use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;
use vitrine_config::ApiSettings;
use vitrine_model::{Exhibition, ExhibitionID, News, NewsID};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

// The API answers either with the bare payload or with the payload wrapped
// under a resource key. A wrapper without the key decodes as empty.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExhibitionList {
    Bare(Vec<Exhibition>),
    Wrapped {
        #[serde(default)]
        exhibitions: Vec<Exhibition>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExhibitionBody {
    Wrapped { exhibition: Exhibition },
    Bare(Exhibition),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NewsList {
    Bare(Vec<News>),
    Wrapped {
        #[serde(default)]
        news: Vec<News>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NewsBody {
    Wrapped { news: News },
    Bare(News),
}

/// Client for the public museum endpoints.
#[derive(Debug, Clone)]
pub struct MuseumApiClient {
    client: Client,
    base_url: String,
}

impl MuseumApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base_url = normalize(&settings.base_url);
        Url::parse(&base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(ApiError::Client)?;

        info!(
            "[MuseumApiClient] Creating API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        format!("{}/{}", self.base_url, path.as_ref().trim_start_matches('/'))
    }

    pub async fn get_all_exhibitions(
        &self,
    ) -> Result<Vec<Exhibition>, ApiError> {
        let body: Option<ExhibitionList> = self.get("exhibitions").await?;
        Ok(match body {
            Some(ExhibitionList::Bare(list))
            | Some(ExhibitionList::Wrapped { exhibitions: list }) => list,
            None => Vec::new(),
        })
    }

    /// `Ok(None)` when the exhibition does not exist.
    pub async fn get_exhibition_by_id(
        &self,
        id: &ExhibitionID,
    ) -> Result<Option<Exhibition>, ApiError> {
        let body: Option<ExhibitionBody> =
            self.get(&format!("exhibitions/{id}")).await?;
        Ok(body.map(|body| match body {
            ExhibitionBody::Wrapped { exhibition } => exhibition,
            ExhibitionBody::Bare(exhibition) => exhibition,
        }))
    }

    pub async fn get_all_news(&self) -> Result<Vec<News>, ApiError> {
        let body: Option<NewsList> = self.get("news").await?;
        Ok(match body {
            Some(NewsList::Bare(list)) | Some(NewsList::Wrapped { news: list }) => {
                list
            }
            None => Vec::new(),
        })
    }

    /// `Ok(None)` when the news item does not exist.
    pub async fn get_news_by_id(
        &self,
        id: &NewsID,
    ) -> Result<Option<News>, ApiError> {
        let body: Option<NewsBody> = self.get(&format!("news/{id}")).await?;
        Ok(body.map(|body| match body {
            NewsBody::Wrapped { news } => news,
            NewsBody::Bare(news) => news,
        }))
    }

    /// GET `path` and decode the JSON body. A 404 is `Ok(None)`.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = self.build_url(path);
        debug!("[MuseumApiClient] GET {}", url);

        let response =
            self.client.get(&url).send().await.map_err(|source| {
                ApiError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let bytes = response.bytes().await.map_err(|source| {
                    ApiError::Transport {
                        url: url.clone(),
                        source,
                    }
                })?;
                serde_json::from_slice(&bytes)
                    .map(Some)
                    .map_err(|source| ApiError::Decode { url, source })
            }
            status => Err(ApiError::Status { url, status }),
        }
    }
}

/// Add `http://` when the scheme is missing and drop trailing slashes.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        warn!(
            "[MuseumApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> MuseumApiClient {
        MuseumApiClient::new(&ApiSettings {
            base_url: base_url.to_string(),
            ..ApiSettings::default()
        })
        .expect("client")
    }

    #[test]
    fn base_url_gets_scheme_and_loses_trailing_slash() {
        assert_eq!(
            client("localhost:8080/museum/").base_url(),
            "http://localhost:8080/museum"
        );
        assert_eq!(
            client("https://museum.example").base_url(),
            "https://museum.example"
        );
    }

    #[test]
    fn build_url_joins_with_single_slash() {
        let api = client("http://localhost:8080/museum");
        assert_eq!(
            api.build_url("/news"),
            "http://localhost:8080/museum/news"
        );
        assert_eq!(
            api.build_url("exhibitions"),
            "http://localhost:8080/museum/exhibitions"
        );
    }

    #[test]
    fn unparsable_base_url_is_rejected() {
        let result = MuseumApiClient::new(&ApiSettings {
            base_url: "http://[::1".to_string(),
            ..ApiSettings::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn wrapper_without_resource_key_is_empty() {
        let body: ExhibitionList =
            serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(matches!(
            body,
            ExhibitionList::Wrapped { exhibitions } if exhibitions.is_empty()
        ));
    }
}
