//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during the YouTube authentication flow.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles OAuth callback requests from Google's
//!   authorization server. Verifies the CSRF `state` parameter and
//!   completes the authorization-code flow by exchanging the code for an
//!   access token.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; each endpoint
//! is an async function wired into the router in [`crate::server`]. The
//! callback shares state with the waiting auth flow through an
//! `Arc<Mutex<Option<AuthState>>>` extension.
//!
//! ## Related Modules
//!
//! - [`crate::youtube`] - YouTube API integration
//! - [`crate::types`] - Type definitions for authentication tokens

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
