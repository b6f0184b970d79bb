use sporback::backup::collect_track_ids;
use sporback::types::{PlaylistTrack, PlaylistTrackItem};

// Helper function to create a regular track entry
fn track(id: &str, name: &str) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(PlaylistTrack {
            id: Some(id.to_string()),
            name: name.to_string(),
        }),
    }
}

// Helper function to create a local track entry (no Spotify id)
fn local_track(name: &str) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(PlaylistTrack {
            id: None,
            name: name.to_string(),
        }),
    }
}

// Helper function to create an unresolvable entry (null track)
fn null_track() -> PlaylistTrackItem {
    PlaylistTrackItem { track: None }
}

#[test]
fn test_collect_track_ids_skips_null_entries() {
    let items = vec![
        track("id1", "Track 1"),
        null_track(),
        local_track("Local Track"),
        track("id2", "Track 2"),
    ];

    let ids = collect_track_ids(&items);

    assert_eq!(ids, vec!["id1", "id2"]);
}

#[test]
fn test_collect_track_ids_preserves_order() {
    let items = vec![
        track("id3", "Track 3"),
        track("id1", "Track 1"),
        track("id2", "Track 2"),
    ];

    let ids = collect_track_ids(&items);

    assert_eq!(ids, vec!["id3", "id1", "id2"]);
}

#[test]
fn test_collect_track_ids_empty_page() {
    assert!(collect_track_ids(&[]).is_empty());

    // A page of only unusable entries is also empty
    let items = vec![null_track(), local_track("Local Track")];
    assert!(collect_track_ids(&items).is_empty());
}

#[test]
fn test_collect_track_ids_keeps_duplicates() {
    // The copy does not deduplicate; a track listed twice is added twice
    let items = vec![
        track("id1", "Track 1"),
        track("id1", "Track 1"),
        track("id2", "Track 2"),
    ];

    let ids = collect_track_ids(&items);

    assert_eq!(ids, vec!["id1", "id1", "id2"]);
}

#[test]
fn test_collect_track_ids_across_page_boundaries() {
    // Each page is collected and submitted independently; every id in the
    // page set shows up exactly once across the per-page submissions.
    let page1 = vec![track("id1", "Track 1"), null_track(), track("id2", "Track 2")];
    let page2 = vec![track("id3", "Track 3"), local_track("Local Track")];
    let page3: Vec<PlaylistTrackItem> = Vec::new();

    let submitted: Vec<String> = [&page1[..], &page2[..], &page3[..]]
        .iter()
        .flat_map(|page| collect_track_ids(page))
        .collect();

    assert_eq!(submitted, vec!["id1", "id2", "id3"]);
    for id in ["id1", "id2", "id3"] {
        assert_eq!(submitted.iter().filter(|s| *s == id).count(), 1);
    }
}
