//! Server binary: bootstraps the database, ensures the students table, and
//! mounts common and student routes.

use axum::Router;
use learnnest::{
    common_routes_with_ready, ensure_database_exists, ensure_students_table, student_routes,
    AppState, Settings,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("learnnest=info".parse()?))
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_students_table(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(student_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
