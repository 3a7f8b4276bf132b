mod common;

use common::{FakeIndex, shot};
use videolens_core::{
    CollectionId, VideoId, find_related_content, find_related_content_in_collection,
};

#[tokio::test]
async fn top_ranked_shot_becomes_the_context() {
    let index = FakeIndex::with_shots(vec![
        shot("cats are mammals", "All About Cats"),
        shot("dogs are mammals too", "All About Dogs"),
    ]);

    let result = find_related_content(&index, &VideoId("v-0".into()), "what are cats?").await;

    assert_eq!(result.text, "cats are mammals");
    let details = result.details.expect("top shot carries details");
    assert_eq!(details.video_title, "All About Cats");
    assert_eq!(details.text, "cats are mammals");
}

#[tokio::test]
async fn zero_matches_yield_empty_context() {
    let index = FakeIndex::default();

    let result = find_related_content(&index, &VideoId("v-0".into()), "anything").await;

    assert!(result.is_empty());
    assert!(result.details.is_none());
}

#[tokio::test]
async fn search_failure_yields_empty_context_instead_of_an_error() {
    let index = FakeIndex {
        fail_search: true,
        ..FakeIndex::default()
    };

    let result = find_related_content(&index, &VideoId("v-0".into()), "anything").await;

    assert!(result.is_empty());
    assert!(result.details.is_none());
}

#[tokio::test]
async fn collection_search_uses_the_same_top_shot_policy() {
    let index = FakeIndex::with_shots(vec![shot("first span", "Video One")]);

    let result =
        find_related_content_in_collection(&index, &CollectionId("c-lectures".into()), "span")
            .await;

    assert_eq!(result.text, "first span");
    assert_eq!(result.details.unwrap().video_title, "Video One");
}
