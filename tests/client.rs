mod common;

use chrono::{TimeZone, Utc};
use common::spawn_app;
use journal_app::Entry;
use journal_app::client::{
    ClientError, EntryApi, EntryBook, HttpEntryApi, MemoryPreferences, Session, SyncPolicy,
};

fn entry(id: &str, title: &str) -> Entry {
    Entry {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        created_at: Utc.with_ymd_and_hms(2025, 1, 29, 23, 39, 32).unwrap(),
        scheduled: Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn http_api_round_trips_every_operation() {
    let app = spawn_app().await;
    let api = HttpEntryApi::new(&app.base_url).unwrap();

    assert!(api.list().await.unwrap().is_empty());

    let created = api.create(&entry("1", "First")).await.unwrap();
    assert_eq!(created, entry("1", "First"));
    assert_eq!(api.get("1").await.unwrap(), created);

    api.update("1", &entry("1", "Edited")).await.unwrap();
    assert_eq!(api.get("1").await.unwrap().title, "Edited");

    api.delete("1").await.unwrap();
    assert!(api.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn http_api_surfaces_server_messages() {
    let app = spawn_app().await;
    let api = HttpEntryApi::new(&app.base_url).unwrap();

    match api.get("ghost").await {
        Err(ClientError::Rejected { status, msg }) => {
            assert_eq!(status, 500);
            assert_eq!(msg, "Error finding entry with id ghost");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    match api.delete("ghost").await {
        Err(ClientError::Rejected { msg, .. }) => assert_eq!(msg, "Error deleting entry"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn http_api_handles_ids_needing_encoding() {
    let app = spawn_app().await;
    let api = HttpEntryApi::new(&app.base_url).unwrap();

    api.create(&entry("a b/c", "Odd id")).await.unwrap();
    assert_eq!(api.get("a b/c").await.unwrap().title, "Odd id");
    api.delete("a b/c").await.unwrap();
}

#[tokio::test]
async fn book_tracks_server_through_mutations() {
    let app = spawn_app().await;
    let seed = HttpEntryApi::new(&app.base_url).unwrap();
    seed.create(&entry("1", "Seeded")).await.unwrap();

    let api = HttpEntryApi::new(&app.base_url).unwrap();
    let mut book = EntryBook::new(api, SyncPolicy::Confirmed);
    book.hydrate().await.unwrap();
    assert_eq!(book.len(), 1);

    book.create(entry("2", "Added")).await.unwrap();
    book.update("1", entry("1", "Edited")).await.unwrap();
    book.delete("2").await.unwrap();

    assert_eq!(book.entries(), seed.list().await.unwrap().as_slice());
}

#[tokio::test]
async fn book_policies_differ_on_failed_writes() {
    let app = spawn_app().await;

    let mut confirmed = EntryBook::new(
        HttpEntryApi::new(&app.base_url).unwrap(),
        SyncPolicy::Confirmed,
    );
    let mut unconditional = EntryBook::new(
        HttpEntryApi::new(&app.base_url).unwrap(),
        SyncPolicy::Unconditional,
    );
    confirmed.create(entry("1", "Shared")).await.unwrap();
    unconditional.hydrate().await.unwrap();

    // Another client removes the entry behind both books' backs.
    HttpEntryApi::new(&app.base_url)
        .unwrap()
        .delete("1")
        .await
        .unwrap();

    assert!(confirmed.update("1", entry("1", "Stale")).await.is_err());
    assert!(unconditional.update("1", entry("1", "Stale")).await.is_err());

    assert_eq!(confirmed.get("1").unwrap().title, "Shared");
    assert_eq!(unconditional.get("1").unwrap().title, "Stale");
    assert!(unconditional.delete("missing").await.is_err());
}

#[tokio::test]
async fn session_starts_hydrated() {
    let app = spawn_app().await;
    HttpEntryApi::new(&app.base_url)
        .unwrap()
        .create(&entry("1", "Existing"))
        .await
        .unwrap();

    let session = Session::start(
        HttpEntryApi::new(&app.base_url).unwrap(),
        MemoryPreferences::default(),
        SyncPolicy::default(),
    )
    .await;
    assert_eq!(session.entries.entries(), &[entry("1", "Existing")]);
    assert!(!session.theme.dark_class_enabled());
}
