use anyhow::Result;
use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::CorsLayer;

use kassa_db::Connection;

mod auth;
mod expenses;
mod reports;
mod responses;
mod sessions;
mod state;

use sessions::Sessions;
use state::AppState;

#[derive(Parser, Debug)]
#[clap(name = "kassa-web", version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[clap(long, default_value = "kassa.sqlite3")]
    pub db: String,

    #[clap(long, default_value = "127.0.0.1:8080")]
    pub listen: String,
}

async fn health() -> Json<&'static str> {
    Json("OK")
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/dashboard", get(reports::dashboard))
        .route("/api/summary", get(reports::summary))
        .route(
            "/api/expenses",
            get(expenses::list).post(expenses::create),
        )
        .route(
            "/api/expenses/:id",
            get(expenses::show)
                .put(expenses::update)
                .delete(expenses::remove),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let db = Connection::open(&cli.db).await?;
    let state = AppState {
        db,
        sessions: Sessions::default(),
    };

    let app = router(state);

    println!("kassa web listening on http://{}", cli.listen);
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
