#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use videolens_core::{
    CollectionId, Result, Shot, VideoId, VideoIndex, VideoRecord, VideolensError,
};

/// In-memory stand-in for the indexing service. Remote state (collections,
/// uploaded videos) persists across a failed batch, like the real service.
#[derive(Default)]
pub struct FakeIndex {
    /// Zero-based position in the batch at which `upload` starts failing.
    pub fail_upload_at: Option<usize>,
    pub fail_search: bool,
    pub shots: Vec<Shot>,
    pub collections: Mutex<Vec<String>>,
    pub videos: Mutex<Vec<VideoRecord>>,
    pub indexed: Mutex<Vec<VideoId>>,
    pub deleted: Mutex<Vec<VideoId>>,
    pub upload_attempts: Mutex<Vec<String>>,
}

impl FakeIndex {
    pub fn with_shots(shots: Vec<Shot>) -> Self {
        Self {
            shots,
            ..Self::default()
        }
    }
}

pub fn shot(text: &str, title: &str) -> Shot {
    Shot {
        text: text.to_string(),
        video_title: title.to_string(),
        start: 0.0,
        end: 0.0,
        stream_url: None,
    }
}

#[async_trait]
impl VideoIndex for FakeIndex {
    async fn create_collection(&self, name: &str, _description: &str) -> Result<CollectionId> {
        self.collections.lock().unwrap().push(name.to_string());
        Ok(CollectionId(format!("c-{name}")))
    }

    async fn upload(&self, _collection: &CollectionId, url: &str) -> Result<VideoRecord> {
        let mut attempts = self.upload_attempts.lock().unwrap();
        let position = attempts.len();
        attempts.push(url.to_string());

        if self.fail_upload_at == Some(position) {
            return Err(VideolensError::UploadFailed {
                url: url.to_string(),
                reason: "invalid media".to_string(),
            });
        }

        let record = VideoRecord {
            id: VideoId(format!("v-{position}")),
            name: format!("video-{position}"),
        };
        self.videos.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_videos(&self, _collection: &CollectionId) -> Result<Vec<VideoRecord>> {
        Ok(self.videos.lock().unwrap().clone())
    }

    async fn index_spoken_words(&self, video: &VideoId) -> Result<()> {
        self.indexed.lock().unwrap().push(video.clone());
        Ok(())
    }

    async fn search_video(&self, _video: &VideoId, _query: &str) -> Result<Vec<Shot>> {
        if self.fail_search {
            return Err(std::io::Error::other("search unavailable").into());
        }
        Ok(self.shots.clone())
    }

    async fn search_collection(&self, _collection: &CollectionId, _query: &str) -> Result<Vec<Shot>> {
        if self.fail_search {
            return Err(std::io::Error::other("search unavailable").into());
        }
        Ok(self.shots.clone())
    }

    async fn transcript_text(&self, video: &VideoId) -> Result<String> {
        Ok(format!("transcript of {video}"))
    }

    async fn add_subtitle(&self, video: &VideoId) -> Result<String> {
        Ok(format!("https://stream.test/{video}/subtitled"))
    }

    async fn generate_thumbnail(&self, video: &VideoId) -> Result<String> {
        Ok(format!("https://images.test/{video}.png"))
    }

    async fn generate_stream(&self, video: &VideoId) -> Result<String> {
        Ok(format!("https://stream.test/{video}"))
    }

    async fn delete(&self, video: &VideoId) -> Result<()> {
        self.videos.lock().unwrap().retain(|v| &v.id != video);
        self.deleted.lock().unwrap().push(video.clone());
        Ok(())
    }
}
