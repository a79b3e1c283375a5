use anyhow::Result;
use axum::{
    Router,
    extract::State,
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use notify_debouncer_mini::{DebounceEventResult, new_debouncer};
use riviera_core::config::SiteConfig;
use riviera_core::{PageDocument, Palette, RenderMode, Renderer, TemplateError, discover_pages};
use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::broadcast;

/// Configuration for the preview server
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Host to bind to
    pub host: String,
    /// Port to serve on
    pub port: u16,
    /// Root of the page documents, read on every request
    pub content_dir: PathBuf,
    /// Auto-open browser
    pub open: bool,
    /// Answer unknown routes with 404 instead of 200
    pub strict_status: bool,
    /// Watch the content and push reloads to open pages
    pub live_reload: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            content_dir: PathBuf::from("./content/pages"),
            open: false,
            strict_status: false,
            live_reload: true,
        }
    }
}

/// Renders page documents on request, straight from disk.
pub struct PreviewServer {
    config: PreviewConfig,
    state: AppState,
}

impl PreviewServer {
    pub fn new(config: PreviewConfig, palette: Palette, site: SiteConfig) -> Result<Self> {
        let (reload_tx, _) = broadcast::channel::<String>(100);
        let state = AppState {
            reload_tx,
            renderer: Arc::new(Renderer::new(palette, site, RenderMode::Preview)?),
            content_dir: Arc::new(config.content_dir.clone()),
            strict_status: config.strict_status,
            live_reload: config.live_reload,
        };
        Ok(Self { config, state })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/__livereload", get(websocket_handler))
            .route("/_pages", get(page_index))
            .fallback(render_route)
            .with_state(self.state.clone())
    }

    /// Run the preview server
    pub async fn run(self) -> Result<()> {
        if !self.config.content_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Content directory does not exist: {}",
                self.config.content_dir.display()
            ));
        }

        if self.config.live_reload {
            let watcher_reload_tx = self.state.reload_tx.clone();
            let watch_path = self.config.content_dir.clone();
            tokio::spawn(async move {
                if let Err(e) = start_file_watcher(watch_path, watcher_reload_tx).await {
                    log::error!("File watcher error: {}", e);
                }
            });
        }

        let app = self.router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        log::info!("Preview server running at http://{}", addr);
        log::info!("Rendering pages from {}", self.config.content_dir.display());
        log::info!("Page list at http://{}/_pages", addr);

        if self.config.open {
            if let Err(e) = open::that(format!("http://{}", addr)) {
                log::warn!("Failed to open browser: {}", e);
            }
        }

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[derive(Clone)]
struct AppState {
    reload_tx: broadcast::Sender<String>,
    renderer: Arc<Renderer>,
    content_dir: Arc<PathBuf>,
    strict_status: bool,
    live_reload: bool,
}

/// Turn a request path into a page route.
///
/// `/` is `index`; a trailing `.html` or `/` is dropped. Paths that could
/// leave the content directory give `None`.
pub fn normalize_route(path: &str) -> Option<String> {
    let route = path.trim_start_matches('/');
    let route = route.strip_suffix(".html").unwrap_or(route);
    let route = route.trim_end_matches('/');

    if route.is_empty() {
        return Some("index".to_string());
    }
    if route.contains('\\')
        || route
            .split('/')
            .any(|segment| segment.is_empty() || segment == "..")
    {
        return None;
    }
    Some(route.to_string())
}

async fn render_route(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(route) = normalize_route(uri.path()) else {
        log::info!("GET {} (rejected)", uri.path());
        return not_found(&state, uri.path());
    };
    log::info!("GET /{}", route);

    let path = state.content_dir.join(format!("{route}.json"));
    let data = match tokio::fs::read_to_string(&path).await {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return not_found(&state, &route);
        }
        Err(err) => {
            log::error!("Could not read {}: {}", path.display(), err);
            return server_error(&state, &err.to_string());
        }
    };

    match PageDocument::parse(&data, &path) {
        Ok(document) => {
            let rendered = state.renderer.render_page(&document, &route);
            state.respond(StatusCode::OK, rendered)
        }
        Err(err) => {
            log::error!("Could not render /{}: {}", route, err);
            server_error(&state, &err.to_string())
        }
    }
}

impl AppState {
    fn finish(&self, html: String) -> String {
        if self.live_reload {
            inject_livereload_script(&html)
        } else {
            html
        }
    }

    fn respond(&self, status: StatusCode, rendered: Result<String, TemplateError>) -> Response {
        match rendered {
            Ok(html) => (status, Html(self.finish(html))).into_response(),
            Err(err) => {
                log::error!("{}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering page").into_response()
            }
        }
    }
}

fn not_found(state: &AppState, route: &str) -> Response {
    let status = if state.strict_status {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    state.respond(status, state.renderer.render_not_found(route))
}

fn server_error(state: &AppState, message: &str) -> Response {
    state.respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        state.renderer.render_error(message),
    )
}

async fn page_index(State(state): State<AppState>) -> Response {
    let content_dir = state.content_dir.clone();
    match tokio::task::spawn_blocking(move || discover_pages(content_dir.as_path())).await {
        Ok(pages) => state.respond(StatusCode::OK, state.renderer.render_page_index(&pages)),
        Err(err) => server_error(&state, &err.to_string()),
    }
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| websocket_connection(socket, state.reload_tx))
}

async fn websocket_connection(mut socket: WebSocket, reload_tx: broadcast::Sender<String>) {
    let mut rx = reload_tx.subscribe();

    if socket
        .send(Message::Text("connected".to_string().into()))
        .await
        .is_err()
    {
        return;
    }

    loop {
        tokio::select! {
            msg = rx.recv() => {
                match msg {
                    Ok(reload_msg) => {
                        if socket.send(Message::Text(reload_msg.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            msg = socket.recv() => {
                if msg.is_none() {
                    break;
                }
            }
        }
    }
}

async fn start_file_watcher(
    watch_path: PathBuf,
    reload_tx: broadcast::Sender<String>,
) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| {
            if let Ok(events) = res {
                for event in events {
                    if event.path.extension().is_some_and(|ext| ext == "json") {
                        let _ = tx.blocking_send(event.path);
                    }
                }
            }
        },
    )?;

    debouncer
        .watcher()
        .watch(&watch_path, notify::RecursiveMode::Recursive)?;

    log::info!("Watching {} for changes", watch_path.display());

    let mut last_reload = std::time::Instant::now();
    while let Some(path) = rx.recv().await {
        log::debug!("File changed: {}", path.display());

        // Several files often change together; one reload covers them all.
        let now = std::time::Instant::now();
        if now.duration_since(last_reload) > Duration::from_millis(1000) {
            let _ = reload_tx.send("reload".to_string());
            last_reload = now;
            log::info!("Reloading after change to {}", path.display());
        }
    }

    Ok(())
}

/// Inject live reload script into HTML content
pub fn inject_livereload_script(html: &str) -> String {
    let script = r#"
<script>
(function() {
    const socket = new WebSocket('ws://' + location.host + '/__livereload');
    socket.onmessage = function(event) {
        if (event.data === 'reload') {
            location.reload();
        }
    };
    socket.onclose = function() {
        console.log('Live reload disconnected');
    };
})();
</script>
"#;

    // Try to inject before closing body tag, or at the end if not found
    if let Some(pos) = html.rfind("</body>") {
        let mut result = String::with_capacity(html.len() + script.len());
        result.push_str(&html[..pos]);
        result.push_str(script);
        result.push_str(&html[pos..]);
        result
    } else {
        format!("{}{}", html, script)
    }
}
