use std::{fmt, future::Future, path::Path};

use crate::{
    info,
    types::{Song, TrackPage},
    utils,
};

/// Everything that can go wrong during an export, by failing step.
///
/// None of these are recovered; each one aborts the run and surfaces a
/// diagnostic naming the step that failed.
#[derive(Debug)]
pub enum ExportError {
    Auth(String),
    Fetch(String),
    Serialization(serde_json::Error),
    Write(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Auth(e) => write!(f, "authentication failed: {}", e),
            ExportError::Fetch(e) => write!(f, "playlist fetch failed: {}", e),
            ExportError::Serialization(e) => write!(f, "JSON encoding failed: {}", e),
            ExportError::Write(e) => write!(f, "file write failed: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Write(err)
    }
}

/// Supplies a bearer credential for the playlist source.
pub trait AuthProvider {
    fn bearer_token(&self) -> impl Future<Output = Result<String, ExportError>> + Send;
}

/// Supplies pages of track records for a playlist.
///
/// `playlist` returns the playlist's display name together with its first
/// page; `page` resolves a continuation cursor. A page with `next: None`
/// ends the export.
pub trait PlaylistSource {
    fn playlist(
        &self,
        token: &str,
        playlist_id: &str,
    ) -> impl Future<Output = Result<(String, TrackPage), ExportError>> + Send;

    fn page(
        &self,
        token: &str,
        cursor: &str,
    ) -> impl Future<Output = Result<TrackPage, ExportError>> + Send;
}

/// The accumulated result of a completed export.
pub struct PlaylistExport {
    pub name: String,
    pub songs: Vec<Song>,
}

/// Exports a playlist's tracks into an ordered song list.
///
/// Obtains a credential from `auth` (no fetch is attempted if that fails),
/// then walks the source's pages in order, appending one [`Song`] per track
/// record. The id counter starts at 1 and increments once per track across
/// the whole export, independent of page boundaries, so ids always form a
/// contiguous 1..N sequence in fetch order.
///
/// Any collaborator error aborts the export and discards partial results;
/// the end-of-pages sentinel (`next: None`) is the only way to finish.
pub async fn export<A, S>(
    auth: &A,
    source: &S,
    playlist_id: &str,
) -> Result<PlaylistExport, ExportError>
where
    A: AuthProvider,
    S: PlaylistSource,
{
    let token = auth.bearer_token().await?;

    let (name, mut page) = source.playlist(&token, playlist_id).await?;
    info!("Playlist {} has a total of {} tracks", name, page.total);

    let mut songs: Vec<Song> = Vec::new();
    let mut count: u32 = 0;
    loop {
        for track in &page.tracks {
            count += 1;
            let song = Song {
                id: count,
                album: track.album.clone(),
                artist: track.artist.clone(),
                track_name: track.name.clone(),
            };
            info!("Track {}: {} - {}", song.id, song.track_name, song.album);
            songs.push(song);
        }

        match page.next.take() {
            Some(cursor) => page = source.page(&token, &cursor).await?,
            None => break,
        }
    }

    Ok(PlaylistExport { name, songs })
}

impl PlaylistExport {
    /// Output file name derived from the playlist's display name.
    pub fn file_name(&self) -> String {
        utils::export_file_name(&self.name)
    }

    /// Serializes the song list as a one-space-indented JSON array.
    pub fn to_json(&self) -> Result<Vec<u8>, ExportError> {
        Ok(utils::to_pretty_json(&self.songs)?)
    }

    /// Writes the serialized song list to `path`.
    ///
    /// The JSON is buffered fully in memory, staged next to the target and
    /// renamed into place, so the output file is observable either fully
    /// written or not at all.
    pub async fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let tmp = path.with_extension("json.tmp");
        async_fs::write(&tmp, &json).await?;
        async_fs::rename(&tmp, path).await?;
        Ok(())
    }
}
