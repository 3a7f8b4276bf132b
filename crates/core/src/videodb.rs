use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
    error::Result,
    types::{CollectionId, Shot, VideoId, VideoRecord},
};

/// Narrow capability interface over the external video-indexing service.
/// Orchestration code only ever sees opaque ids, never raw service objects.
#[async_trait]
pub trait VideoIndex: Send + Sync {
    async fn create_collection(&self, name: &str, description: &str) -> Result<CollectionId>;
    async fn upload(&self, collection: &CollectionId, url: &str) -> Result<VideoRecord>;
    async fn list_videos(&self, collection: &CollectionId) -> Result<Vec<VideoRecord>>;
    async fn index_spoken_words(&self, video: &VideoId) -> Result<()>;
    async fn search_video(&self, video: &VideoId, query: &str) -> Result<Vec<Shot>>;
    async fn search_collection(&self, collection: &CollectionId, query: &str) -> Result<Vec<Shot>>;
    async fn transcript_text(&self, video: &VideoId) -> Result<String>;
    /// Burns subtitles into a new stream and returns its URL.
    async fn add_subtitle(&self, video: &VideoId) -> Result<String>;
    async fn generate_thumbnail(&self, video: &VideoId) -> Result<String>;
    async fn generate_stream(&self, video: &VideoId) -> Result<String>;
    async fn delete(&self, video: &VideoId) -> Result<()>;
}

const PLAYER_URL: &str = "https://console.videodb.io/player";

/// Web player link for a stream URL, the terminal equivalent of `play()`.
pub fn player_url(stream_url: &str) -> String {
    format!("{PLAYER_URL}?url={stream_url}")
}

/// reqwest client for the hosted indexing service.
pub struct VideoDbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct VideoPayload {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CollectionPayload {
    id: String,
}

#[derive(Debug, Deserialize)]
struct VideoListPayload {
    videos: Vec<VideoPayload>,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    shots: Vec<Shot>,
}

#[derive(Debug, Deserialize)]
struct TranscriptPayload {
    text: String,
}

#[derive(Debug, Deserialize)]
struct StreamPayload {
    stream_url: String,
}

#[derive(Debug, Deserialize)]
struct ThumbnailPayload {
    thumbnail_url: String,
}

impl VideoDbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("x-access-token", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<T>>()
            .await?;
        Ok(response.data)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: serde_json::Value) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header("x-access-token", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<T>>()
            .await?;
        Ok(response.data)
    }
}

impl From<VideoPayload> for VideoRecord {
    fn from(payload: VideoPayload) -> Self {
        VideoRecord {
            id: VideoId(payload.id),
            name: payload.name,
        }
    }
}

#[async_trait]
impl VideoIndex for VideoDbClient {
    async fn create_collection(&self, name: &str, description: &str) -> Result<CollectionId> {
        let payload: CollectionPayload = self
            .post(
                "/collection",
                serde_json::json!({ "name": name, "description": description }),
            )
            .await?;
        Ok(CollectionId(payload.id))
    }

    async fn upload(&self, collection: &CollectionId, url: &str) -> Result<VideoRecord> {
        let payload: VideoPayload = self
            .post(
                &format!("/collection/{collection}/upload"),
                serde_json::json!({ "url": url }),
            )
            .await?;
        Ok(payload.into())
    }

    async fn list_videos(&self, collection: &CollectionId) -> Result<Vec<VideoRecord>> {
        let payload: VideoListPayload = self.get(&format!("/collection/{collection}/video")).await?;
        Ok(payload.videos.into_iter().map(VideoRecord::from).collect())
    }

    async fn index_spoken_words(&self, video: &VideoId) -> Result<()> {
        self.http
            .post(format!("{}/video/{}/index", self.base_url, video))
            .header("x-access-token", &self.api_key)
            .json(&serde_json::json!({ "index_type": "spoken_word" }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn search_video(&self, video: &VideoId, query: &str) -> Result<Vec<Shot>> {
        let payload: SearchPayload = self
            .post(
                &format!("/video/{video}/search"),
                serde_json::json!({ "query": query, "search_type": "semantic" }),
            )
            .await?;
        Ok(payload.shots)
    }

    async fn search_collection(&self, collection: &CollectionId, query: &str) -> Result<Vec<Shot>> {
        let payload: SearchPayload = self
            .post(
                &format!("/collection/{collection}/search"),
                serde_json::json!({ "query": query, "search_type": "semantic" }),
            )
            .await?;
        Ok(payload.shots)
    }

    async fn transcript_text(&self, video: &VideoId) -> Result<String> {
        let payload: TranscriptPayload = self
            .get(&format!("/video/{video}/transcript?text=true"))
            .await?;
        Ok(payload.text)
    }

    async fn add_subtitle(&self, video: &VideoId) -> Result<String> {
        let payload: StreamPayload = self
            .post(
                &format!("/video/{video}/workflow"),
                serde_json::json!({ "type": "add_subtitles" }),
            )
            .await?;
        Ok(payload.stream_url)
    }

    async fn generate_thumbnail(&self, video: &VideoId) -> Result<String> {
        let payload: ThumbnailPayload = self.get(&format!("/video/{video}/thumbnail")).await?;
        Ok(payload.thumbnail_url)
    }

    async fn generate_stream(&self, video: &VideoId) -> Result<String> {
        let payload: StreamPayload = self.get(&format!("/video/{video}/stream")).await?;
        Ok(payload.stream_url)
    }

    async fn delete(&self, video: &VideoId) -> Result<()> {
        self.http
            .delete(format!("{}/video/{}", self.base_url, video))
            .header("x-access-token", &self.api_key)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
