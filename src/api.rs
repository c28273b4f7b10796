//! HTTP server: the rendered page plus JSON views of the live widgets.
//!
//! Every request is a fresh page load. Nothing is cached between requests
//! and no state is shared across widgets.

use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::site::{
    widgets::{ApodView, LaunchesView},
    Site,
};

/// Shared state for handlers.
#[derive(Clone)]
pub struct ApiState {
    site: Arc<Site>,
    uptime: Instant,
}

impl ApiState {
    pub fn new(site: Site) -> Self {
        Self {
            site: Arc::new(site),
            uptime: Instant::now(),
        }
    }
}

/// Page-load query parameters. Kept as raw strings so a bad value falls
/// back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    lang: Option<String>,
    width: Option<String>,
    more: Option<String>,
}

impl PageQuery {
    fn params(&self, site: &Site) -> crate::site::PageParams {
        site.params(
            self.lang.as_deref(),
            self.width.as_deref(),
            self.more.as_deref(),
        )
    }
}

#[derive(Debug, Serialize)]
struct LaunchesResponse {
    lang: &'static str,
    width: u32,
    #[serde(flatten)]
    view: LaunchesView,
}

#[derive(Debug, Serialize)]
struct ApodResponse {
    lang: &'static str,
    #[serde(flatten)]
    view: ApodView,
}

/// `GET /`: the full page.
async fn page(State(state): State<ApiState>, Query(query): Query<PageQuery>) -> Html<String> {
    let params = query.params(&state.site);
    Html(state.site.render(params).await)
}

/// `GET /api/launches`: launches widget after one page load.
async fn launches(
    State(state): State<ApiState>,
    Query(query): Query<PageQuery>,
) -> Json<LaunchesResponse> {
    let site = &state.site;
    let params = query.params(site);
    let mut widget = site.launches_widget(params.width);
    widget.load().await;
    widget.set_expanded(params.expanded);

    Json(LaunchesResponse {
        lang: params.lang.code(),
        width: params.width,
        view: LaunchesView::resolve(&widget, site.localizer(params.lang), site.offset),
    })
}

/// `GET /api/apod`: astronomy-picture widget after one page load.
async fn apod(State(state): State<ApiState>, Query(query): Query<PageQuery>) -> Json<ApodResponse> {
    let site = &state.site;
    let params = query.params(site);
    let mut widget = site.apod_widget();
    widget.load().await;

    Json(ApodResponse {
        lang: params.lang.code(),
        view: ApodView::resolve(widget.state(), site.localizer(params.lang)),
    })
}

/// `GET /api/health`: liveness with uptime.
async fn health(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime.elapsed().as_secs(),
    }))
}

/// Build the axum router with shared state.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/api/launches", get(launches))
        .route("/api/apod", get(apod))
        .route("/api/health", get(health))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Bind `addr` and serve until interrupted.
pub async fn serve(addr: &str, site: Site) -> anyhow::Result<()> {
    let app = build_router(ApiState::new(site));

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("server failed to bind to {addr}: {e}");
            return Err(e.into());
        }
    };

    info!("serving on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router(site: Site) -> Router {
        build_router(ApiState::new(site))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let (status, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router(fakes::site(Ok(vec![]), Ok(fakes::apod("image"))));
        let json = get_json(app, "/api/health").await;
        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].is_u64());
    }

    #[tokio::test]
    async fn test_page_is_html() {
        let app = test_router(fakes::site(Ok(fakes::launches(4)), Ok(fakes::apod("image"))));
        let req = Request::get("/?lang=en&width=700").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"<html lang="en">"#));
        assert_eq!(html.matches(r#"<article class="launch-card""#).count(), 2);
    }

    #[tokio::test]
    async fn test_page_bad_width_uses_default() {
        let app = test_router(fakes::site(Ok(fakes::launches(5)), Ok(fakes::apod("image"))));
        let (status, html) = get(app, "/?width=wide").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches(r#"<article class="launch-card""#).count(), 3);
    }

    #[tokio::test]
    async fn test_launches_success_json() {
        let app = test_router(fakes::site(Ok(fakes::launches(10)), Ok(fakes::apod("image"))));
        let json = get_json(app, "/api/launches?lang=en&width=1440").await;
        assert_eq!(json["state"], "success");
        assert_eq!(json["lang"], "en");
        assert_eq!(json["initial"], 3);
        assert_eq!(json["total"], 10);
        assert_eq!(json["can_show_more"], true);
        assert_eq!(json["expanded"], false);
        let cards = json["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0]["provider"], "SpaceX");
        assert_eq!(cards[0]["time"], "20 Oct 2026, 14:00");
        assert_eq!(cards[0]["status"], "Go — Go for Launch");
    }

    #[tokio::test]
    async fn test_launches_expanded_json() {
        let app = test_router(fakes::site(Ok(fakes::launches(12)), Ok(fakes::apod("image"))));
        let json = get_json(app, "/api/launches?width=1440&more=true").await;
        assert_eq!(json["expanded"], true);
        assert_eq!(json["cards"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_launches_empty_json() {
        let app = test_router(fakes::site(Ok(vec![]), Ok(fakes::apod("image"))));
        let json = get_json(app, "/api/launches?lang=en").await;
        assert_eq!(json["state"], "empty");
        assert_eq!(json["message"], "No launches are scheduled right now.");
        assert_eq!(json["can_show_more"], false);
    }

    #[tokio::test]
    async fn test_launches_error_is_still_ok_response() {
        let app = test_router(fakes::site(Err("timeout".into()), Ok(fakes::apod("image"))));
        let json = get_json(app, "/api/launches?lang=tr").await;
        assert_eq!(json["state"], "error");
        assert_eq!(json["message"], "Fırlatma verileri alınamadı.");
        assert!(json["cards"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apod_json_states() {
        let app = test_router(fakes::site(Ok(vec![]), Ok(fakes::apod("image"))));
        let json = get_json(app, "/api/apod?lang=en").await;
        assert_eq!(json["state"], "success");
        assert_eq!(json["date"], "October 16, 2026");
        assert_eq!(json["image_url"], "https://example.invalid/orion.jpg");
        assert!(json["message"].is_null());

        let app = test_router(fakes::site(Ok(vec![]), Ok(fakes::apod("video"))));
        let json = get_json(app, "/api/apod?lang=tr").await;
        assert_eq!(json["state"], "no_image");
        assert_eq!(json["date"], "16 Ekim 2026");
        assert!(json["image_url"].is_null());
        assert_eq!(json["message"], "Bugünün içeriği bir fotoğraf değil.");

        let app = test_router(fakes::site(Ok(vec![]), Err("403".into())));
        let json = get_json(app, "/api/apod").await;
        assert_eq!(json["state"], "error");
        assert!(json["explanation"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = test_router(fakes::site(Ok(vec![]), Ok(fakes::apod("image"))));
        let (status, _) = get(app, "/api/missions").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
