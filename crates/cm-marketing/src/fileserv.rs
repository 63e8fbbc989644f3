//! Fallback handler: static files first, SSR for everything else

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

/// Serve a static file from the site root when one matches the URI,
/// otherwise render the app so the router can produce its 404 page.
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let root = options.site_root.clone();

    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res,
        _ => {
            let handler = leptos_axum::render_app_to_stream(options, App);
            handler(req).await.into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    ServeDir::new(root)
        .oneshot(req)
        .await
        .map(IntoResponse::into_response)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
