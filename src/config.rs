//! Configuration management for the playlist exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! YouTube OAuth client, server settings, and the default playlist.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `plexcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/plexcli/.env`
/// - macOS: `~/Library/Application Support/plexcli/.env`
/// - Windows: `%LOCALAPPDATA%/plexcli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("plexcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the YouTube authentication flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID used for the client-credentials grant.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret used for the client-credentials grant.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// This is where the client-credentials grant is exchanged for a bearer
/// token, e.g. `https://accounts.spotify.com/api/token`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Used for all API operations after authentication, e.g.
/// `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify playlist ID exported when no `--playlist` flag is given.
///
/// # Panics
///
/// Panics if the `SPOTIFY_PLAYLIST_ID` environment variable is not set.
pub fn spotify_playlist_id() -> String {
    env::var("SPOTIFY_PLAYLIST_ID").expect("SPOTIFY_PLAYLIST_ID must be set")
}

/// Returns the YouTube OAuth client ID.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn youtube_client_id() -> String {
    env::var("YOUTUBE_API_AUTH_CLIENT_ID").expect("YOUTUBE_API_AUTH_CLIENT_ID must be set")
}

/// Returns the YouTube OAuth client secret.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_CLIENT_SECRET` environment variable is not set.
pub fn youtube_client_secret() -> String {
    env::var("YOUTUBE_API_AUTH_CLIENT_SECRET").expect("YOUTUBE_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the YouTube OAuth authorization URL.
///
/// This is where users are redirected to grant permissions to the
/// application, e.g. `https://accounts.google.com/o/oauth2/v2/auth`.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_URL` environment variable is not set.
pub fn youtube_apiauth_url() -> String {
    env::var("YOUTUBE_API_AUTH_URL").expect("YOUTUBE_API_AUTH_URL must be set")
}

/// Returns the YouTube OAuth token exchange URL.
///
/// Used for exchanging authorization codes for access tokens and for
/// refreshing expired tokens, e.g. `https://oauth2.googleapis.com/token`.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_TOKEN_URL` environment variable is not set.
pub fn youtube_apitoken_url() -> String {
    env::var("YOUTUBE_API_TOKEN_URL").expect("YOUTUBE_API_TOKEN_URL must be set")
}

/// Returns the YouTube Data API base URL.
///
/// Used for playlist creation after authentication, e.g.
/// `https://www.googleapis.com/youtube/v3`.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_URL` environment variable is not set.
pub fn youtube_apiurl() -> String {
    env::var("YOUTUBE_API_URL").expect("YOUTUBE_API_URL must be set")
}

/// Returns the YouTube OAuth redirect URI.
///
/// This must match the redirect URI registered in the Google Cloud console
/// and point at the local callback server.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_REDIRECT_URI` environment variable is not set.
pub fn youtube_redirect_uri() -> String {
    env::var("YOUTUBE_API_REDIRECT_URI").expect("YOUTUBE_API_REDIRECT_URI must be set")
}

/// Returns the YouTube OAuth scope permissions.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_SCOPE` environment variable is not set.
pub fn youtube_scope() -> String {
    env::var("YOUTUBE_API_AUTH_SCOPE").expect("YOUTUBE_API_AUTH_SCOPE must be set")
}
