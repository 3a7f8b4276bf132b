use log::warn;

use crate::{
    types::{CollectionId, RetrievalResult, ShotDetails, VideoId},
    videodb::VideoIndex,
};

/// Search one video for content matching the query and keep the top shot.
///
/// A failed or empty search is an empty-context condition for the answer
/// synthesizer, never an error to the caller.
pub async fn find_related_content<V: VideoIndex + ?Sized>(
    index: &V,
    video: &VideoId,
    query: &str,
) -> RetrievalResult {
    match index.search_video(video, query).await {
        Ok(shots) => top_shot(shots, query),
        Err(e) => {
            warn!("Search failed for query '{query}': {e}");
            RetrievalResult::empty()
        }
    }
}

/// Collection-wide variant of [`find_related_content`].
pub async fn find_related_content_in_collection<V: VideoIndex + ?Sized>(
    index: &V,
    collection: &CollectionId,
    query: &str,
) -> RetrievalResult {
    match index.search_collection(collection, query).await {
        Ok(shots) => top_shot(shots, query),
        Err(e) => {
            warn!("Search failed for query '{query}': {e}");
            RetrievalResult::empty()
        }
    }
}

fn top_shot(shots: Vec<crate::types::Shot>, query: &str) -> RetrievalResult {
    match shots.into_iter().next() {
        Some(shot) => RetrievalResult {
            text: shot.text.clone(),
            details: Some(ShotDetails {
                video_title: shot.video_title,
                text: shot.text,
            }),
        },
        None => {
            warn!("No shots matched query '{query}'");
            RetrievalResult::empty()
        }
    }
}
