//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! exporter: authentication and paginated playlist retrieval. It handles
//! all HTTP communication with Spotify and maps wire responses into the
//! source-agnostic page model the export core consumes.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **No User Context**: The exporter reads public catalog data only, so
//!   no authorization-code dance or browser interaction is needed
//! - **Basic Header**: Client id and secret travel as an HTTP Basic
//!   authorization header to the token endpoint
//! - **Per-Run Tokens**: Client-credentials tokens cannot be refreshed;
//!   a fresh one is requested on every run and never persisted
//!
//! ### Playlist Module
//!
//! [`playlist`] - Handles playlist retrieval with pagination:
//! - **First Page Embedding**: `/playlists/{id}` returns metadata plus the
//!   first tracks page in one response
//! - **Cursor Pagination**: Each page carries an absolute `next` URL; a
//!   `null` value is the end-of-pages signal
//! - **Source Mapping**: Implements the export core's `PlaylistSource`
//!   seam, normalizing wire items into track records and skipping entries
//!   whose track is null (removed or unavailable)
//!
//! ## Error Handling Philosophy
//!
//! The export path is fail-fast: any HTTP or decoding error is propagated
//! immediately and aborts the run. There is no retry logic and no partial
//! success; this reproduces the behavior of the program this tool
//! descends from.
//!
//! ## API Coverage
//!
//! - `POST {token endpoint}` - Client-credentials token request
//! - `GET /playlists/{id}` - Playlist metadata with first tracks page
//! - `GET {next URL}` - Continuation pages
//!
//! ## Configuration Integration
//!
//! Endpoint URLs and credentials come from [`crate::config`]; nothing is
//! hardcoded so the client can be pointed at a mock server in tests.

pub mod auth;
pub mod playlist;
