use std::sync::atomic::{AtomicUsize, Ordering};

use plexcli::management::{AuthProvider, ExportError, PlaylistSource, export};
use plexcli::types::{Song, TrackPage, TrackRecord};

// Helper function to create a test track record
fn track(album: &str, artist: &str, name: &str) -> TrackRecord {
    TrackRecord {
        album: album.to_string(),
        artist: artist.to_string(),
        name: name.to_string(),
    }
}

struct StaticAuth;

impl AuthProvider for StaticAuth {
    async fn bearer_token(&self) -> Result<String, ExportError> {
        Ok("test-token".to_string())
    }
}

struct FailingAuth;

impl AuthProvider for FailingAuth {
    async fn bearer_token(&self) -> Result<String, ExportError> {
        Err(ExportError::Auth("invalid client".to_string()))
    }
}

/// In-memory playlist source serving a fixed sequence of pages.
///
/// Cursors are page indices rendered as strings; an optional 1-based page
/// number can be marked as failing to simulate a mid-export fetch error.
struct PagedSource {
    name: String,
    pages: Vec<Vec<TrackRecord>>,
    fail_on_page: Option<usize>,
    fetches: AtomicUsize,
}

impl PagedSource {
    fn new(name: &str, pages: Vec<Vec<TrackRecord>>) -> Self {
        Self {
            name: name.to_string(),
            pages,
            fail_on_page: None,
            fetches: AtomicUsize::new(0),
        }
    }

    fn failing_on_page(mut self, page: usize) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn page_at(&self, index: usize) -> Result<TrackPage, ExportError> {
        if self.fail_on_page == Some(index + 1) {
            return Err(ExportError::Fetch("simulated page failure".to_string()));
        }

        let next = if index + 1 < self.pages.len() {
            Some((index + 1).to_string())
        } else {
            None
        };

        Ok(TrackPage {
            tracks: self.pages[index].clone(),
            next,
            total: self.pages.iter().map(|p| p.len() as u64).sum(),
        })
    }
}

impl PlaylistSource for PagedSource {
    async fn playlist(
        &self,
        _token: &str,
        _playlist_id: &str,
    ) -> Result<(String, TrackPage), ExportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok((self.name.clone(), self.page_at(0)?))
    }

    async fn page(&self, _token: &str, cursor: &str) -> Result<TrackPage, ExportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let index: usize = cursor.parse().expect("fake cursor should be a page index");
        self.page_at(index)
    }
}

#[tokio::test]
async fn ids_are_contiguous_across_page_boundaries() {
    let source = PagedSource::new(
        "Road Trip",
        vec![
            vec![track("Album A", "Artist A", "One"), track("Album A", "Artist A", "Two")],
            vec![track("Album B", "Artist B", "Three"), track("Album B", "Artist B", "Four")],
            vec![track("Album C", "Artist C", "Five")],
        ],
    );

    let export = export(&StaticAuth, &source, "playlist-1").await.unwrap();

    assert_eq!(export.name, "Road Trip");
    assert_eq!(export.songs.len(), 5);

    // ids are exactly 1..=N in fetch order
    let ids: Vec<u32> = export.songs.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let names: Vec<&str> = export.songs.iter().map(|s| s.track_name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two", "Three", "Four", "Five"]);
}

#[tokio::test]
async fn empty_pages_do_not_reset_the_counter() {
    let source = PagedSource::new(
        "Gappy",
        vec![
            vec![
                track("A", "X", "One"),
                track("A", "X", "Two"),
                track("A", "X", "Three"),
            ],
            vec![],
            vec![track("B", "Y", "Four"), track("B", "Y", "Five")],
        ],
    );

    let export = export(&StaticAuth, &source, "playlist-1").await.unwrap();

    assert_eq!(export.songs.len(), 5);
    let ids: Vec<u32> = export.songs.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    // order is page-1 tracks, then page-3 tracks
    let names: Vec<&str> = export.songs.iter().map(|s| s.track_name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two", "Three", "Four", "Five"]);

    // the empty page was still fetched: first page + 2 continuations
    assert_eq!(source.fetch_count(), 3);
}

#[tokio::test]
async fn empty_playlist_exports_empty_array() {
    let source = PagedSource::new("Empty", vec![vec![]]);

    let export = export(&StaticAuth, &source, "playlist-1").await.unwrap();
    assert!(export.songs.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export.file_name());
    export.write_to(&path).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "[]");
}

#[tokio::test]
async fn failing_page_aborts_without_writing_a_file() {
    let source = PagedSource::new(
        "Broken",
        vec![
            vec![track("A", "X", "One"), track("A", "X", "Two")],
            vec![track("B", "Y", "Three")],
        ],
    )
    .failing_on_page(2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Broken.json");

    let result = export(&StaticAuth, &source, "playlist-1").await;
    match result {
        Err(ExportError::Fetch(_)) => {}
        other => panic!("expected a fetch error, got {:?}", other.map(|e| e.songs)),
    }

    // partial results are discarded, nothing reaches the filesystem
    assert!(!path.exists());
}

#[tokio::test]
async fn failing_first_page_aborts_with_fetch_error() {
    let source =
        PagedSource::new("Broken", vec![vec![track("A", "X", "One")]]).failing_on_page(1);

    let result = export(&StaticAuth, &source, "playlist-1").await;
    assert!(matches!(result, Err(ExportError::Fetch(_))));
}

#[tokio::test]
async fn auth_failure_prevents_any_fetch() {
    let source = PagedSource::new("Untouched", vec![vec![track("A", "X", "One")]]);

    let result = export(&FailingAuth, &source, "playlist-1").await;

    assert!(matches!(result, Err(ExportError::Auth(_))));
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn written_file_round_trips_to_the_song_list() {
    let source = PagedSource::new(
        "Mix",
        vec![
            vec![track("Abbey Road", "The Beatles", "Come Together")],
            vec![track("Rumours", "Fleetwood Mac", "Dreams")],
        ],
    );

    let export = export(&StaticAuth, &source, "playlist-1").await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export.file_name());
    export.write_to(&path).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Song> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, export.songs);
}

#[tokio::test]
async fn file_name_derives_from_the_playlist_name() {
    let source = PagedSource::new("Late Night Drive", vec![vec![]]);

    let export = export(&StaticAuth, &source, "playlist-1").await.unwrap();
    assert_eq!(export.file_name(), "Late Night Drive.json");
}
