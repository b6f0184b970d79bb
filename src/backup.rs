//! The playlist duplication routine.
//!
//! Copies every track of a source playlist into a freshly created playlist
//! owned by the given user. The source listing is walked page by page; the
//! non-null track identifiers of each page are submitted in one add call
//! against the destination, so every identifier is attempted exactly once
//! per page boundary. There is no deduplication, ordering guarantee, or
//! partial-failure recovery: the first error wins and is propagated.

use chrono::Local;

use crate::{
    Res, info, spotify,
    types::{CreatePlaylistResponse, PlaylistTrackItem},
    utils,
};

/// Duplicates the source playlist into a new playlist named `new_name`.
///
/// Fetches the source metadata (its name goes into the generated
/// description), creates the empty destination playlist under `user_id`,
/// then replicates the source's track listing page by page until the
/// upstream pagination signals exhaustion. Pages without any usable track
/// identifier are skipped; the upstream rejects empty add calls.
///
/// # Errors
///
/// Any failing playlist fetch, playlist creation, track-page fetch, or
/// track-add aborts the copy and is returned to the caller. Tracks already
/// added stay in the destination playlist.
pub async fn backup_playlist(
    token: &str,
    source_id: &str,
    new_name: &str,
    user_id: &str,
) -> Res<CreatePlaylistResponse> {
    let source = spotify::playlist::get_playlist(token, source_id).await?;
    let description = utils::backup_description(&source.name, Local::now());

    let created = spotify::playlist::create_playlist(token, user_id, new_name, &description).await?;
    info!("Created playlist \"{}\"", created.name);

    let mut page_url: Option<String> = None;
    loop {
        let (items, next) =
            spotify::playlist::get_playlist_tracks(token, source_id, page_url).await?;

        let track_ids = collect_track_ids(&items);
        if !track_ids.is_empty() {
            spotify::playlist::add_tracks(token, &created.id, &track_ids).await?;
            info!(
                "Added {} tracks to \"{}\"",
                track_ids.len(),
                created.name
            );
        }

        match next {
            Some(url) => page_url = Some(url),
            None => break,
        }
    }

    Ok(created)
}

/// Collects the non-null track identifiers of one track page.
///
/// Entries whose track is null (unresolvable items) or whose id is null
/// (local tracks) are skipped; the page order is preserved.
pub fn collect_track_ids(items: &[PlaylistTrackItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .filter_map(|track| track.id.clone())
        .collect()
}
