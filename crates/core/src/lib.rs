pub mod config;
pub mod error;
pub mod gemini;
pub mod ingest;
pub mod retrieval;
pub mod session;
pub mod types;
pub mod videodb;

pub use config::Config;
pub use error::{Result, VideolensError};
pub use gemini::{AnswerModel, GeminiClient, build_prompt, generate_answer_from_context};
pub use ingest::{IngestOutcome, add_videos_to_index};
pub use retrieval::{find_related_content, find_related_content_in_collection};
pub use session::{GREETING, Phase, Session};
pub use types::{
    CollectionId, ConversationTurn, RetrievalResult, Role, Shot, ShotDetails, VideoId, VideoRecord,
};
pub use videodb::{VideoDbClient, VideoIndex, player_url};
