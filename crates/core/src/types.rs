use serde::{Deserialize, Serialize};

/// Opaque identifier the indexing service assigns to a video.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier the indexing service assigns to a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(pub String);

impl CollectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One indexed video: display name plus the id it is addressed by remotely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: VideoId,
    pub name: String,
}

/// A ranked search result segment returned by the indexing service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shot {
    pub text: String,
    pub video_title: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub stream_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub message: String,
}

/// Source metadata for a retrieved text span.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotDetails {
    pub video_title: String,
    pub text: String,
}

/// The top-ranked span of context for a query. Empty means no match was
/// found, which is a reportable condition rather than an error.
#[derive(Clone, Debug, Default)]
pub struct RetrievalResult {
    pub text: String,
    pub details: Option<ShotDetails>,
}

impl RetrievalResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
