//! Static file responder.
//!
//! Resolves GET requests against the configured public directory and
//! serves file contents verbatim with a Content-Type inferred from the
//! file extension. Traversal components and dot-files are never resolved.
//!
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::server::AppState;

/// Serve the asset the request path points at, or 404
pub async fn serve_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(rel) = sanitize_path(uri.path()) else {
        return not_found();
    };

    let full_path = state.public_dir.join(rel);
    match tokio::fs::metadata(&full_path).await {
        Ok(meta) if meta.is_dir() => {
            // Directory request, try its index file
            let index_path = full_path.join("index.html");
            match tokio::fs::metadata(&index_path).await {
                Ok(index_meta) if index_meta.is_file() => serve_file(&index_path).await,
                _ => not_found(),
            }
        }
        Ok(_) => serve_file(&full_path).await,
        Err(_) => not_found(),
    }
}

async fn serve_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(content) => ([(header::CONTENT_TYPE, mime_type(path))], content).into_response(),
        // File vanished between metadata and read
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Sanitize request path to prevent directory traversal
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let path = path.trim_start_matches('/');

    if path.split('/').any(|s| s.starts_with('.')) {
        return None;
    }

    let mut result = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(c) => result.push(c),
            Component::ParentDir => return None,
            _ => {}
        }
    }

    Some(result)
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert!(sanitize_path("/index.html").is_some());
        assert!(sanitize_path("/css/style.css").is_some());
        assert!(sanitize_path("/../etc/passwd").is_none());
        assert!(sanitize_path("/.hidden").is_none());
        assert!(sanitize_path("/assets/../../secret").is_none());
    }

    #[test]
    fn test_sanitize_path_root() {
        assert_eq!(sanitize_path("/"), Some(PathBuf::new()));
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(
            mime_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(mime_type(Path::new("style.css")), "text/css; charset=utf-8");
        assert_eq!(mime_type(Path::new("image.png")), "image/png");
        assert_eq!(mime_type(Path::new("unknown")), "application/octet-stream");
    }
}
