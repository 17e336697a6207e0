use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct FrontendAssets;

pub async fn serve_static(req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path().trim_start_matches('/');

    // Try to serve the exact path first
    if !path.is_empty() {
        if let Some(content) = FrontendAssets::get(path) {
            return response_from_asset(path, content.data.into_owned());
        }
    }

    // Unknown API routes are real 404s, not the SPA shell
    if path.starts_with("api/") {
        return not_found();
    }

    // Fallback to index.html for SPA routing
    match FrontendAssets::get("index.html") {
        Some(content) => response_from_asset("index.html", content.data.into_owned()),
        None => not_found(),
    }
}

fn not_found() -> Response<Body> {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn response_from_asset(path: &str, data: Vec<u8>) -> Response<Body> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    // index.html must be revalidated so a new build is picked up
    let cache_control = if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=31536000, immutable"
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CACHE_CONTROL, cache_control.to_string()),
        ],
        data,
    )
        .into_response()
}
