use reqwest::Client;

use crate::{
    config,
    management::{ExportError, PlaylistSource},
    types::{PlaylistResponse, PlaylistTracksResponse, TrackPage, TrackRecord},
    warning,
};

/// Retrieves a playlist with its first page of tracks from the Spotify Web API.
///
/// Uses the `/playlists/{id}` endpoint, which embeds the first tracks page
/// together with the playlist metadata. Subsequent pages are fetched by
/// following the page's `next` URL via [`get_tracks_page`].
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Spotify ID of the playlist to fetch
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistResponse)` - Playlist metadata plus the first tracks page
/// - `Err(reqwest::Error)` - Network error, auth error, or unknown playlist
pub async fn get_playlist(
    token: &str,
    playlist_id: &str,
) -> Result<PlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PlaylistResponse>().await
}

/// Retrieves one continuation page of playlist tracks.
///
/// `page_url` is the absolute `next` URL handed back by the previous page;
/// the API encodes offset and limit in it, so it is followed verbatim.
pub async fn get_tracks_page(
    token: &str,
    page_url: &str,
) -> Result<PlaylistTracksResponse, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(page_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PlaylistTracksResponse>().await
}

fn into_track_page(page: PlaylistTracksResponse) -> TrackPage {
    let mut tracks = Vec::with_capacity(page.items.len());
    for (position, item) in page.items.into_iter().enumerate() {
        match item.track {
            Some(track) => tracks.push(TrackRecord {
                album: track.album.name,
                artist: track
                    .artists
                    .first()
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                name: track.name,
            }),
            // Removed or region-blocked entries come back as null tracks.
            None => warning!("Skipping unavailable track at position {}", position),
        }
    }

    TrackPage {
        tracks,
        next: page.next,
        total: page.total,
    }
}

/// Playlist source backed by the Spotify Web API.
pub struct SpotifyPlaylist;

impl PlaylistSource for SpotifyPlaylist {
    async fn playlist(
        &self,
        token: &str,
        playlist_id: &str,
    ) -> Result<(String, TrackPage), ExportError> {
        let playlist = get_playlist(token, playlist_id).await?;
        Ok((playlist.name, into_track_page(playlist.tracks)))
    }

    async fn page(&self, token: &str, cursor: &str) -> Result<TrackPage, ExportError> {
        let page = get_tracks_page(token, cursor).await?;
        Ok(into_track_page(page))
    }
}
