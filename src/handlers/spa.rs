use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use model::PageId;
use tracing::{debug, warn};

use crate::schemas::AppState;

/// Whether `path` is one the single-page app renders a page for: the root
/// or a single segment naming a known page.
pub fn is_app_route(path: &str) -> bool {
    let segment = path.trim_matches('/');
    segment.is_empty() || (!segment.contains('/') && segment.parse::<PageId>().is_ok())
}

/// Answers every path that is not a static asset with `index.html`, so the
/// client router can take over. Unknown pages still get the app, with a 404.
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let status = if is_app_route(uri.path()) {
        StatusCode::OK
    } else {
        debug!("No page for {}, serving app with 404", uri.path());
        StatusCode::NOT_FOUND
    };

    match tokio::fs::read_to_string(state.config.index_path()).await {
        Ok(index) => (status, Html(index)).into_response(),
        Err(e) => {
            warn!(
                "Cannot read index.html from {}: {}",
                state.config.static_dir.display(),
                e
            );
            (StatusCode::NOT_FOUND, "frontend bundle not found").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_page_slugs_are_app_routes() {
        assert!(is_app_route("/"));
        assert!(is_app_route(""));
        assert!(is_app_route("/dashboard"));
        assert!(is_app_route("/llm-traffic/"));
        assert!(is_app_route("/Sentiment"));
    }

    #[test]
    fn unknown_or_nested_paths_are_not() {
        assert!(!is_app_route("/bogus"));
        assert!(!is_app_route("/dashboard/extra"));
        assert!(!is_app_route("/assets/missing.js"));
    }
}
