//! School Roster Backend Server
//!
//! Creates the roster schema and starts the development HTTP server.

use school_roster_backend::api::create_router;
use school_roster_backend::config::Config;
use school_roster_backend::db::{
    DatabasePool, NewStudent, NewTeacher, Roster, Student, Teacher, TeacherStudent,
};
use school_roster_backend::models::HealthResponse;
use school_roster_backend::state::AppState;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Environment variable naming the configuration file.
const CONFIG_PATH_ENV: &str = "SCHOOL_CONFIG";

/// Configuration file read when `SCHOOL_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(school_roster_backend::api::handlers::health_check),
    components(schemas(
        HealthResponse,
        Teacher,
        Student,
        TeacherStudent,
        NewTeacher,
        NewStudent
    )),
    tags((name = "Health", description = "Health check endpoints")),
    info(
        title = "School Roster API",
        version = "0.1.0",
        description = "Teacher and student roster backed by SQLite",
        license(name = "MIT")
    )
)]
struct ApiDoc;

/// Loads the configuration file if present, then applies environment overrides.
fn load_config() -> anyhow::Result<Config> {
    let path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&path).exists() {
        info!("Loading configuration from {}", path);
        Config::load(&path)?
    } else {
        info!("No configuration file at {}, using defaults", path);
        Config::default()
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;

    // Create the database file and schema
    let db = DatabasePool::connect(&config.database).await?;
    db.initialize_schema().await?;

    let stats = Roster::new(db.clone()).stats().await?;
    info!(
        "Roster ready: {} teachers, {} students, {} links",
        stats.teachers, stats.students, stats.links
    );

    let state = Arc::new(AppState::new(db));

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
