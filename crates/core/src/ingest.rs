use log::info;

use crate::{
    error::{Result, VideolensError},
    types::{CollectionId, VideoRecord},
    videodb::VideoIndex,
};

pub struct IngestOutcome {
    pub collection: CollectionId,
    pub videos: Vec<VideoRecord>,
}

/// Upload every URL into a fresh collection, then index spoken words for
/// each uploaded video.
///
/// All-or-nothing for the caller: the first failure aborts the batch and no
/// partial mapping is returned. The collection and any videos created before
/// the failure are left on the remote side; there is no rollback.
pub async fn add_videos_to_index<V: VideoIndex + ?Sized>(
    index: &V,
    collection_name: &str,
    urls: &[String],
) -> Result<IngestOutcome> {
    if collection_name.trim().is_empty() {
        return Err(VideolensError::EmptyCollectionName);
    }

    let collection = index
        .create_collection(collection_name, collection_name)
        .await
        .map_err(|e| VideolensError::CollectionCreateFailed {
            name: collection_name.to_string(),
            reason: e.to_string(),
        })?;

    let mut videos = Vec::with_capacity(urls.len());
    for url in urls {
        let record = index.upload(&collection, url).await.map_err(|e| {
            VideolensError::UploadFailed {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;
        info!("Video: {} ({}) uploaded successfully", record.name, url);
        videos.push(record);
    }

    for video in index.list_videos(&collection).await? {
        index.index_spoken_words(&video.id).await.map_err(|e| {
            VideolensError::IndexingFailed {
                video_name: video.name.clone(),
                reason: e.to_string(),
            }
        })?;
        info!("Indexed spoken words in: {}", video.name);
    }

    Ok(IngestOutcome { collection, videos })
}
