use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::AuthState, warning, youtube};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthState>>>>,
) -> Html<&'static str> {
    if let Some(code) = params.get("code") {
        let mut state = shared_state.lock().await;
        let Some(ref mut auth_state) = state.as_mut() else {
            return Html("<h4>No authorization in progress.</h4>");
        };

        // Reject responses that don't echo our CSRF state back
        if params.get("state") != Some(&auth_state.state) {
            warning!("Callback state mismatch; rejecting authorization response.");
            return Html("<h4>State mismatch.</h4>");
        }

        match youtube::auth::exchange_code(code).await {
            Ok(token) => {
                auth_state.token = Some(token.clone());
                Html("<h2>Authentication successful.</h2><p>You can close this browser window.</p>")
            }
            Err(e) => {
                warning!("Token exchange failed: {}", e);
                Html("<h4>Login failed.</h4>")
            }
        }
    } else {
        Html("<h4>Missing authorization code.</h4>")
    }
}
