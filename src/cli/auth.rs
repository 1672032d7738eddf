use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{types::AuthState, youtube};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthState>>>) {
    youtube::auth::auth(shared_state).await;
}
