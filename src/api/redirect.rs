use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{backup::auth::ACCESS_TOKEN_PARAM, types::Token, warning};

/// Redirect target of the backend after login.
///
/// Stores a non-empty `access_token` query parameter in the shared state and
/// answers with a short page telling the user whether to close the window.
/// Earlier tokens are overwritten by later redirects.
pub async fn redirect(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<Token>>>>,
) -> Html<&'static str> {
    match params.get(ACCESS_TOKEN_PARAM).filter(|t| !t.is_empty()) {
        Some(access_token) => {
            let mut state = shared_state.lock().await;
            *state = Some(Token::new(access_token.as_str()));
            Html("<h2>Login successful.</h2><p>You can close this browser window.</p>")
        }
        None => {
            warning!("Redirect received without an access token.");
            Html("<h4>Login failed: missing access token.</h4>")
        }
    }
}
