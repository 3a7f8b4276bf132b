use videolens_core::{
    CollectionId, GREETING, Phase, Role, Session, VideoId, VideoRecord,
};

fn record(n: usize) -> VideoRecord {
    VideoRecord {
        id: VideoId(format!("v-{n}")),
        name: format!("video-{n}"),
    }
}

fn saved_session(videos: usize) -> Session {
    let mut session = Session::new();
    let records = (0..videos).map(record).collect();
    assert!(session.store_library(CollectionId("c-1".into()), records));
    session
}

#[test]
fn history_starts_with_the_greeting() {
    let mut session = saved_session(1);

    let history = session.history("video-0");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role, Role::Assistant);
    assert_eq!(history[0].message, GREETING);
}

#[test]
fn history_grows_by_two_per_exchange() {
    let mut session = saved_session(1);

    let exchanges = 3;
    for i in 0..exchanges {
        session.push_turn("video-0", Role::User, format!("question {i}"));
        session.push_turn("video-0", Role::Assistant, format!("answer {i}"));
    }

    // greeting + one user and one assistant turn per exchange
    assert_eq!(session.history("video-0").len(), 1 + 2 * exchanges);
}

#[test]
fn histories_are_tracked_per_video() {
    let mut session = saved_session(2);

    session.push_turn("video-0", Role::User, "only here");

    assert_eq!(session.history("video-0").len(), 2);
    assert_eq!(session.history("video-1").len(), 1);
}

#[test]
fn library_is_not_stored_without_videos() {
    let mut session = Session::new();

    assert!(!session.store_library(CollectionId("c-1".into()), Vec::new()));
    assert_eq!(session.phase(), Phase::CollectingUrls);
    assert!(session.collection().is_none());
}

#[test]
fn storing_a_library_saves_the_urls() {
    let session = saved_session(2);

    assert_eq!(session.phase(), Phase::UrlsSaved);
    assert_eq!(session.videos().len(), 2);
    assert_eq!(session.video_id("video-1"), Some(&VideoId("v-1".into())));
}

#[test]
fn removing_a_video_drops_its_record_and_history() {
    let mut session = saved_session(2);
    session.push_turn("video-0", Role::User, "hello");

    session.remove_video("video-0");

    assert!(session.video_id("video-0").is_none());
    assert_eq!(session.videos().len(), 1);
    // a later visit starts over with the greeting
    assert_eq!(session.history("video-0").len(), 1);
}

#[test]
fn delete_all_returns_the_session_to_url_collection() {
    let mut session = saved_session(3);
    session.push_turn("video-0", Role::User, "hello");
    session.push_turn("video-0", Role::Assistant, "hi");

    session.reset();

    assert_eq!(session.phase(), Phase::CollectingUrls);
    assert!(session.videos().is_empty());
    assert!(session.collection().is_none());
    assert_eq!(session.history("video-0").len(), 1);
    assert_eq!(session.history("video-0")[0].message, GREETING);
}
