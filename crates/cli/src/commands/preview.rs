use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use omnyo_site_generator::{BuildOptions, NOT_FOUND_FILE, generate_site};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};
use tokio::sync::broadcast;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::load_site;

#[derive(Clone)]
struct AppState {
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with live reload for local development.
///
/// This command:
/// - Builds the site into a temporary directory, with the reload script
/// - Serves it, answering unknown paths with the 404 page
/// - Watches the project directory, rebuilds on change and tells open
///   pages to reload
///
/// # Arguments
///
/// * `path` - Path to the project directory containing site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting preview server...");
    println!("   Project: {}", path.display());

    let dist = tempfile::TempDir::new().context("Failed to create preview directory")?;
    let site_name = rebuild(&path, dist.path())?;
    println!("   ✓ Built: {}", site_name);

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    let app = router(dist.path(), reload_tx.clone());

    let watcher_path = path.clone();
    let watcher_dist = dist.path().to_path_buf();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_dist, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(dist: &Path, reload_tx: broadcast::Sender<()>) -> Router {
    let pages =
        ServeDir::new(dist).not_found_service(ServeFile::new(dist.join(NOT_FOUND_FILE)));

    Router::new()
        .route("/_reload", get(sse_handler))
        .fallback_service(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { reload_tx })
}

/// Build the site with the reload script into `dist`
fn rebuild(project: &Path, dist: &Path) -> Result<String> {
    let site = load_site(project)?;
    let options = BuildOptions {
        is_preview: true,
        ..BuildOptions::today()
    };
    let written = generate_site(&site, &options).write_to(dist)?;
    tracing::debug!(files = written, "preview rebuilt");
    Ok(site.config.site.name)
}

/// Whether a changed path should trigger a rebuild
fn is_source_change(path: &Path) -> bool {
    let filename = path.file_name().unwrap_or_default().to_string_lossy();
    !filename.starts_with('.') && !filename.ends_with('~')
}

/// Watch for file changes, rebuild and trigger reload
async fn watch_files(
    path: PathBuf,
    dist: PathBuf,
    reload_tx: broadcast::Sender<()>,
) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                if event.paths.iter().any(|p| is_source_change(p)) {
                    println!("   📝 File changed, rebuilding...");
                    match rebuild(&path, &dist) {
                        Ok(_) => {
                            let _ = reload_tx.send(());
                        }
                        Err(e) => eprintln!("   ⚠ Rebuild failed: {:#}", e),
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for live reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) => yield Ok(Event::default().data("reload")),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
