use std::collections::HashMap;

use uuid::Uuid;

use crate::types::{CollectionId, ConversationTurn, Role, VideoId, VideoRecord};

pub const GREETING: &str =
    "Hello! Feel free to search through the video content. What's your question?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    CollectingUrls,
    UrlsSaved,
}

/// In-memory state for one interactive session: the saved library mapping
/// and one append-only conversation history per video.
pub struct Session {
    id: Uuid,
    phase: Phase,
    collection: Option<CollectionId>,
    videos: Vec<VideoRecord>,
    histories: HashMap<String, Vec<ConversationTurn>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: Phase::CollectingUrls,
            collection: None,
            videos: Vec::new(),
            histories: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn collection(&self) -> Option<&CollectionId> {
        self.collection.as_ref()
    }

    /// Saved videos in upload order.
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn video_id(&self, name: &str) -> Option<&VideoId> {
        self.videos.iter().find(|v| v.name == name).map(|v| &v.id)
    }

    /// Record a successful ingestion. The session only leaves the
    /// URL-collection phase when the mapping is non-empty.
    pub fn store_library(&mut self, collection: CollectionId, videos: Vec<VideoRecord>) -> bool {
        if videos.is_empty() {
            return false;
        }
        self.collection = Some(collection);
        self.videos = videos;
        self.phase = Phase::UrlsSaved;
        true
    }

    /// Conversation history for a video, created with the greeting on first
    /// access and append-only thereafter.
    pub fn history(&mut self, video_name: &str) -> &[ConversationTurn] {
        self.history_mut(video_name)
    }

    pub fn push_turn(&mut self, video_name: &str, role: Role, message: impl Into<String>) {
        self.history_mut(video_name).push(ConversationTurn {
            role,
            message: message.into(),
        });
    }

    pub fn remove_video(&mut self, name: &str) {
        self.videos.retain(|v| v.name != name);
        self.histories.remove(name);
    }

    /// Delete-all: back to collecting URLs with no videos and no histories.
    pub fn reset(&mut self) {
        self.collection = None;
        self.videos.clear();
        self.histories.clear();
        self.phase = Phase::CollectingUrls;
    }

    fn history_mut(&mut self, video_name: &str) -> &mut Vec<ConversationTurn> {
        self.histories
            .entry(video_name.to_string())
            .or_insert_with(|| {
                vec![ConversationTurn {
                    role: Role::Assistant,
                    message: GREETING.to_string(),
                }]
            })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
