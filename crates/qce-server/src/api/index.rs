//! Root view.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// GET / - The editor landing page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.clone())
}
