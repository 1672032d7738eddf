use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    management::{self, PlaylistExport, TokenManager},
    spotify::{auth::ClientCredentials, playlist::SpotifyPlaylist},
    success, warning, youtube,
};

pub async fn export(playlist: Option<String>, output: Option<PathBuf>, youtube_mirror: bool) {
    let playlist_id = playlist.unwrap_or_else(config::spotify_playlist_id);

    let export = match management::export(&ClientCredentials, &SpotifyPlaylist, &playlist_id).await
    {
        Ok(export) => export,
        Err(e) => error!("Export failed: {}", e),
    };

    let path = output.unwrap_or_else(|| PathBuf::from(export.file_name()));
    if let Err(e) = export.write_to(&path).await {
        error!("Export failed: {}", e);
    }

    success!("Exported {} tracks to {}", export.songs.len(), path.display());

    if youtube_mirror {
        mirror_to_youtube(&export).await;
    }
}

/// Creates one YouTube playlist per exported track.
///
/// Runs strictly after the export file is written; per-track failures are
/// warnings, not fatal errors.
async fn mirror_to_youtube(export: &PlaylistExport) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load YouTube token. Please run plexcli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Creating YouTube playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut created = 0;
    for song in &export.songs {
        let token = token_mgr.get_valid_token().await;
        let title = format!("{} - {}", song.artist, song.track_name);
        pb.set_message(format!("Creating playlist {}...", title));

        let description = format!("Mirrored from the {} export", export.name);
        match youtube::playlist::create(&token, title, description).await {
            Ok(_) => created += 1,
            Err(e) => warning!("Failed to create playlist for {}: {}", song.track_name, e),
        }
    }

    pb.finish_and_clear();
    success!("Created {} YouTube playlists", created);
}
