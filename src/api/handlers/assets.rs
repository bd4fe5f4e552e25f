// src/api/handlers/assets.rs
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct PanelAssets;

const INDEX: &str = "index.html";

/// Serves the embedded panel page. The empty path and `/gui/` map to the
/// index so the page can sit at the base URL the proxy path resolves from.
pub async fn serve_asset(path: web::Path<String>) -> HttpResponse {
    let requested = path.into_inner();
    let name = match requested.trim_start_matches("gui/") {
        "" => INDEX,
        other => other,
    };

    let Some(asset) = PanelAssets::get(name) else {
        return HttpResponse::NotFound().body(format!("No panel asset '{}'", name));
    };

    let mime = mime_guess::from_path(name).first_or_octet_stream();
    let mut resp = HttpResponse::Ok();
    resp.content_type(mime.essence_str());
    if name == INDEX {
        resp.insert_header((header::CACHE_CONTROL, "no-cache"));
    }
    resp.body(asset.data.into_owned())
}
