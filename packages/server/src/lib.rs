#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the accident map dashboard.
//!
//! Serves the REST API behind the map, the weekday-by-hour table, and the
//! free-text question box, plus the static frontend assets. The dataset
//! is loaded and normalized exactly once at startup and shared read-only
//! across all requests; every filter interaction recomputes its view
//! synchronously. A missing or malformed dataset is startup-fatal — the
//! process does not serve requests without it.

mod handlers;
pub mod interactive;

use std::path::Path;
use std::sync::Arc;

use accident_map_ai::QuestionEngine;
use accident_map_dataset::RecordCollection;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

/// Default location of the dataset snapshot, relative to the working
/// directory. Overridable via `DATASET_PATH`.
pub const DEFAULT_DATASET_PATH: &str = "assets/unfallorte.csv";

/// Shared application state.
pub struct AppState {
    /// The immutable record collection, loaded once at boot.
    pub collection: Arc<RecordCollection>,
    /// Question engine, present when AI credentials are configured.
    pub question_engine: Option<Arc<QuestionEngine>>,
}

/// Starts the accident map API server.
///
/// Loads the dataset, builds the question engine from environment
/// credentials (the map and table endpoints work without one), and starts
/// the Actix-Web HTTP server. This is a regular async function — the
/// caller provides the runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the dataset is missing or malformed.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let dataset_path =
        std::env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());

    log::info!("Loading dataset...");
    let collection =
        RecordCollection::load(Path::new(&dataset_path)).expect("Failed to load accident dataset");

    let question_engine = match QuestionEngine::from_env() {
        Ok(engine) => Some(Arc::new(engine)),
        Err(e) => {
            log::warn!("Question answering disabled: {e}");
            None
        }
    };

    let state = web::Data::new(AppState {
        collection: Arc::new(collection),
        question_engine,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8056);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/meta", web::get().to(handlers::meta))
                    .route("/map", web::get().to(handlers::map_points))
                    .route("/table", web::get().to(handlers::table))
                    .route("/ask", web::post().to(handlers::ask)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
