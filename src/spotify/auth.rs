use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    config,
    management::{AuthProvider, ExportError},
    types::ClientToken,
};

/// Requests a bearer token via the OAuth client-credentials grant.
///
/// Sends the client id and secret as an HTTP Basic authorization header to
/// the Spotify token endpoint. The resulting token carries no user context;
/// it grants access to public catalog data such as playlists.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(ClientToken)` - Fresh bearer token for API requests
/// - `Err(reqwest::Error)` - Network error, API error, or invalid credentials
///
/// # Token Lifetime
///
/// Client-credentials tokens cannot be refreshed; a new one is requested
/// per run, so nothing is persisted.
pub async fn request_token() -> Result<ClientToken, reqwest::Error> {
    let credentials = STANDARD.encode(format!(
        "{client_id}:{client_secret}",
        client_id = config::spotify_client_id(),
        client_secret = config::spotify_client_secret()
    ));

    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    response.json::<ClientToken>().await
}

/// Auth provider backed by the Spotify client-credentials grant.
pub struct ClientCredentials;

impl AuthProvider for ClientCredentials {
    async fn bearer_token(&self) -> Result<String, ExportError> {
        let token = request_token()
            .await
            .map_err(|e| ExportError::Auth(e.to_string()))?;
        Ok(token.access_token)
    }
}
