use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Persisted OAuth token for the YouTube Data API (authorization-code flow).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Short-lived Spotify bearer token from the client-credentials grant.
///
/// Never persisted; a fresh one is requested per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Shared state between the YouTube auth flow and the callback handler.
///
/// The `state` field is the CSRF token sent with the authorization request;
/// the callback rejects responses that do not echo it back.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub state: String,
    pub token: Option<Token>,
}

/// One exported track in the canonical output schema.
///
/// Keys are `id`, `album`, `artist` and `trackName`; ids form a contiguous
/// 1..N sequence in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    pub album: String,
    pub artist: String,
    #[serde(rename = "trackName")]
    pub track_name: String,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub id: u32,
    pub track: String,
    pub artist: String,
    pub album: String,
}

/// A normalized track record as handed to the exporter by a playlist source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub album: String,
    pub artist: String,
    pub name: String,
}

/// One batch of track records plus the continuation cursor.
///
/// `next: None` is the end-of-pages sentinel; `total` is a hint used only
/// for a log message.
#[derive(Debug, Clone)]
pub struct TrackPage {
    pub tracks: Vec<TrackRecord>,
    pub next: Option<String>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
    pub total: u64,
}

/// A playlist entry; `track` is `null` for removed or unavailable tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub name: String,
    pub album: TrackAlbum,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateYoutubePlaylistRequest {
    pub snippet: YoutubePlaylistSnippet,
    pub status: YoutubePlaylistStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubePlaylistSnippet {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubePlaylistStatus {
    #[serde(rename = "privacyStatus")]
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateYoutubePlaylistResponse {
    pub id: String,
}
