//! # YouTube Integration Module
//!
//! This module provides the optional YouTube side path: an OAuth 2.0
//! authorization-code flow (with a local callback server) and playlist
//! creation via the YouTube Data API. It is invoked strictly after a
//! successful export and never interleaves with the pagination loop.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow:
//! - **Complete Auth Flow**: From authorization URL to token persistence
//! - **CSRF Protection**: A random `state` token is verified by the
//!   callback handler before the code is exchanged
//! - **Offline Access**: Requests `access_type=offline` so a refresh token
//!   is issued and later runs need no browser
//! - **Browser Integration**: Automatic browser launch for user consent
//! - **Local Callback Server**: Temporary HTTP server receives the
//!   authorization code
//!
//! ### Playlist Module
//!
//! [`playlist`] - Creates playlists through `POST /playlists`:
//! - One playlist per exported track, titled `{artist} - {trackName}`
//! - Public privacy status, matching the historical behavior
//!
//! ## Error Types
//!
//! All functions return `Result` types:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Token persistence errors
//!
//! Per-track creation failures are warnings at the CLI layer, not fatal
//! errors; the export artifact is already on disk before this module runs.

pub mod auth;
pub mod playlist;
