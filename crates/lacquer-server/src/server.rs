//! Development server implementation.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use lacquer_showcase::{block_id, render_demo, strip_client_directive};
use lacquer_site::{BuildConfig, SiteBuilder};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{hmr_client_script, HmrHub, HmrMessage};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Site build configuration
    pub build: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    Bind(SocketAddr, String),

    #[error("File watch error: {0}")]
    Watch(String),

    #[error("Build error: {0}")]
    Build(String),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    hmr: HmrHub,
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    ///
    /// Builds the site once up front, then serves the output directory and
    /// rebuilds on changes to the docs or showcase directories.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ServerError::Bind(SocketAddr::from(([127, 0, 0, 1], self.config.port)), e.to_string())
            })?;

        // Initial build
        let build_config = self.config.build.clone();
        let result = tokio::task::spawn_blocking(move || SiteBuilder::new(build_config).build())
            .await
            .map_err(|e| ServerError::Build(e.to_string()))?
            .map_err(|e| ServerError::Build(e.to_string()))?;
        tracing::info!(
            "Built {} pages ({} previews) in {}ms",
            result.pages,
            result.previews,
            result.duration_ms
        );

        let state = Arc::new(ServerState {
            config: self.config.clone(),
            hmr: HmrHub::new(),
        });

        let watch_paths = vec![
            self.config.build.docs_dir.clone(),
            self.config.build.showcase_dir.clone(),
        ];

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::Watch(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            drop(watcher);
        });

        let assets_dir = self.config.build.output_dir.join("assets");
        let app = Router::new()
            .route("/__hmr", get(ws_handler))
            .route("/__hmr.js", get(hmr_script_handler))
            .nest_service("/assets", ServeDir::new(assets_dir))
            .fallback(get(page_handler))
            .with_state(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events.
async fn handle_watch_event(state: &Arc<ServerState>, event: WatchEvent) {
    match event {
        WatchEvent::DemoModified(path) => {
            tracing::info!("Demo modified: {}", path.display());
            rebuild(state).await;

            // Push an in-place preview update when the demo still renders;
            // anything else falls back to a reload.
            match preview_update(&state.config.build, &path) {
                Some(msg) => state.hmr.send(msg),
                None => state.hmr.send(HmrMessage::Reload),
            }
        }

        WatchEvent::PageModified(path) => {
            tracing::info!("Page modified: {}", path.display());
            rebuild(state).await;
            state.hmr.send(HmrMessage::Reload);
        }

        WatchEvent::Created(_) | WatchEvent::Deleted(_) | WatchEvent::Modified(_) => {
            rebuild(state).await;
            state.hmr.send(HmrMessage::Reload);
        }
    }
}

/// Rebuild the site, logging failures without tearing the server down.
async fn rebuild(state: &Arc<ServerState>) {
    let config = state.config.build.clone();
    let result = tokio::task::spawn_blocking(move || SiteBuilder::new(config).build()).await;

    match result {
        Ok(Ok(r)) => {
            tracing::info!("Rebuilt {} pages in {}ms", r.pages, r.duration_ms);
        }
        Ok(Err(e)) => {
            tracing::warn!("Rebuild failed: {}", e);
        }
        Err(e) => {
            tracing::warn!("Rebuild task failed: {}", e);
        }
    }
}

/// Build an in-place preview update for a modified demo file.
fn preview_update(build: &BuildConfig, path: &Path) -> Option<HmrMessage> {
    let relative = path.strip_prefix(&build.showcase_dir).ok()?;
    let id = relative
        .with_extension("")
        .components()
        .filter_map(|c| c.as_os_str().to_str().map(String::from))
        .collect::<Vec<_>>()
        .join("/");
    if id.is_empty() {
        return None;
    }

    let source = std::fs::read_to_string(path).ok()?;
    let element = render_demo(&source).ok()?;

    Some(HmrMessage::UpdatePreview {
        id: block_id(&id),
        element,
        code: strip_client_directive(&source),
    })
}

/// Serve a built page, injecting the hot-reload client script.
async fn page_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let output_dir = &state.config.build.output_dir;

    let Some(relative) = sanitize_path(uri.path()) else {
        return (StatusCode::BAD_REQUEST, "Invalid path").into_response();
    };

    let direct = output_dir.join(&relative);
    let candidate = if direct.extension().is_some() && direct.is_file() {
        direct
    } else {
        output_dir.join(&relative).join("index.html")
    };

    match candidate.extension().and_then(|e| e.to_str()) {
        Some("html") => match tokio::fs::read_to_string(&candidate).await {
            Ok(html) => Html(inject_hmr_script(&html)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        },
        ext => match tokio::fs::read(&candidate).await {
            Ok(bytes) => {
                let content_type = match ext {
                    Some("css") => "text/css",
                    Some("js") => "application/javascript",
                    Some("json") => "application/json",
                    Some("xml") => "application/xml",
                    Some("svg") => "image/svg+xml",
                    Some("txt") => "text/plain",
                    _ => "application/octet-stream",
                };
                ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
            }
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        },
    }
}

/// Strip the leading slash and reject traversal components.
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let relative = PathBuf::from(trimmed);

    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => return None,
        }
    }

    Some(relative)
}

/// Insert the hot-reload script before the closing body tag.
fn inject_hmr_script(html: &str) -> String {
    let tag = r#"<script src="/__hmr.js"></script>"#;
    match html.rfind("</body>") {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + tag.len());
            out.push_str(&html[..pos]);
            out.push_str(tag);
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{}{}", html, tag),
    }
}

/// Handler for the hot-reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hmr.subscribe();

    let msg = match serde_json::to_string(&HmrMessage::Connected) {
        Ok(m) => m,
        Err(_) => return,
    };
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(hmr_msg) = rx.recv().await {
        let Ok(json) = serde_json::to_string(&hmr_msg) else {
            continue;
        };
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the hot-reload client script.
async fn hmr_script_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let ws_url = format!(
        "ws://{}:{}/__hmr",
        state.config.host, state.config.port
    );
    let script = hmr_client_script(&ws_url);
    ([(header::CONTENT_TYPE, "application/javascript")], script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
    }

    #[test]
    fn injects_hmr_script_before_body_close() {
        let html = "<html><body><p>Hi</p></body></html>";
        let out = inject_hmr_script(html);

        assert!(out.contains(r#"<script src="/__hmr.js"></script></body>"#));
    }

    #[test]
    fn sanitize_rejects_traversal() {
        assert!(sanitize_path("/../etc/passwd").is_none());
        assert!(sanitize_path("/components/button/").is_some());
        assert_eq!(
            sanitize_path("/components/button/"),
            Some(PathBuf::from("components/button/"))
        );
    }

    #[test]
    fn preview_update_targets_block_by_path_id() {
        let temp = tempdir().unwrap();
        let showcase = temp.path().join("showcase");
        let demo = showcase.join("components/button/HeartbeatButton.tsx");
        fs::create_dir_all(demo.parent().unwrap()).unwrap();
        fs::write(
            &demo,
            "'use client'\nexport default function HeartbeatButton() {\n  return <button className=\"beat\">Beat</button>\n}\n",
        )
        .unwrap();

        let build = BuildConfig {
            showcase_dir: showcase,
            ..Default::default()
        };

        let msg = preview_update(&build, &demo).unwrap();

        match msg {
            HmrMessage::UpdatePreview { id, element, code } => {
                assert_eq!(id, "preview-components-button-heartbeatbutton");
                assert_eq!(element, r#"<button class="beat">Beat</button>"#);
                assert!(code.starts_with("export default"));
            }
            other => panic!("expected UpdatePreview, got {:?}", other),
        }
    }

    #[test]
    fn preview_update_falls_back_on_unrenderable_demo() {
        let temp = tempdir().unwrap();
        let showcase = temp.path().join("showcase");
        let demo = showcase.join("components/odd/NoJsx.tsx");
        fs::create_dir_all(demo.parent().unwrap()).unwrap();
        fs::write(&demo, "export const value = 42;\n").unwrap();

        let build = BuildConfig {
            showcase_dir: showcase,
            ..Default::default()
        };

        assert!(preview_update(&build, &demo).is_none());
    }
}
