//! # CLI Module
//!
//! This module provides the command-line interface layer for the playlist
//! exporter. It implements all user-facing commands and coordinates
//! between authentication, the export core, and output rendering.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the YouTube OAuth authorization-code flow with a
//!   local callback server
//!
//! ### Export Operations
//!
//! - [`export`] - Exports a playlist's tracks to a JSON file; optionally
//!   mirrors each exported track to a YouTube playlist afterwards
//!
//! ### Information Commands
//!
//! - [`show`] - Renders a previously exported file as a table
//!
//! ## Architecture Design
//!
//! The CLI layer is the single top-level error handler: library code
//! propagates `Result`s and only the functions here decide to terminate
//! the process (via the `error!` macro) and with which diagnostic. That
//! keeps the export core testable without exiting the test process.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Export Core, Token Persistence)
//!     ↓
//! API Layer (Spotify / YouTube Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! The export path is fail-fast: any collaborator error aborts the run
//! with a message naming the failing step and no file is written. Only the
//! YouTube mirror loop degrades gracefully, warning per failed playlist
//! and carrying on, because the export artifact is already on disk when it
//! runs.

mod auth;
mod export;
mod show;

pub use auth::auth;
pub use export::export;
pub use show::show;
