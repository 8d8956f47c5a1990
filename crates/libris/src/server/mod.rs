mod books;
mod process_url;
mod router;

pub use router::{build_router, AppState};

use crate::prelude::*;
use crate::store::SqliteBookStore;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// SQLite database file (a `sqlite:` URL is also accepted)
    #[arg(long, env = "DB_URL", default_value = crate::config::DEFAULT_DATABASE)]
    pub database: String,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let path = crate::config::database_path(&options.database);
    if global.verbose {
        log::debug!("Opening database at {}", path.display());
    }

    let store = SqliteBookStore::open(&path)
        .wrap_err_with(|| format!("Failed to connect to database {}", path.display()))?;
    store.migrate().wrap_err("Failed to migrate database")?;

    let app_router = build_router(AppState {
        books: Arc::new(store),
    });

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{}", addr);

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    pub fn app() -> Router {
        let store = SqliteBookStore::in_memory().unwrap();
        store.migrate().unwrap();
        app_with(store)
    }

    pub fn app_with(store: impl crate::store::BookStore + 'static) -> Router {
        build_router(AppState {
            books: Arc::new(store),
        })
    }

    /// Send a request through the router and decode the JSON response body
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        dispatch(app, request).await
    }

    /// Same as [`send`] with a raw, possibly malformed, JSON body
    pub async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        dispatch(app, request).await
    }

    async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }
}
