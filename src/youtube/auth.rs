use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthState, Token},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 authorization-code flow with Google.
///
/// This function orchestrates the entire authentication process including:
/// 1. Generating a CSRF state token
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback
/// 5. Persisting the obtained token for future use
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the CSRF token and
///   the resulting OAuth token between this flow and the callback handler
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthState>>>) {
    let state_token = utils::generate_state_token();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{youtube_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&access_type=offline&state={state}",
        youtube_auth_url = &config::youtube_apiauth_url(),
        client_id = &config::youtube_client_id(),
        redirect_uri = &config::youtube_redirect_uri(),
        scope = &config::youtube_scope(),
        state = state_token
    );

    // Store CSRF state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthState {
            state: state_token.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            // initialize token manager with token
            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed token with a 60-second timeout.
/// This function runs concurrently with the callback handler that
/// populates the token after successful code exchange.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthState>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(auth_state) = lock.as_ref() {
            if let Some(token) = &auth_state.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization-code flow by posting the code together with
/// the client id, client secret and redirect URI to Google's token
/// endpoint. The refresh token is only present when the user granted
/// offline access, which the authorization URL requests.
pub async fn exchange_code(code: &str) -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(&config::youtube_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", &config::youtube_client_id()),
            ("client_secret", &config::youtube_client_secret()),
            ("redirect_uri", &config::youtube_redirect_uri()),
        ])
        .send()
        .await?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
