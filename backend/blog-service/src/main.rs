use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context as _;
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_service::config::{Config, CorsConfig};
use blog_service::db::{create_pool, run_migrations};
use blog_service::schema::{build_schema, AppSchema};

async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL page served on the same path as the API for manual exploration.
async fn graphiql_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// SDL (Schema Definition Language) endpoint for schema introspection
async fn schema_handler(schema: web::Data<AppSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(schema.sdl())
}

async fn index_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<p> Hello World!</p>")
}

async fn health_handler() -> &'static str {
    "ok"
}

fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    for origin in config.allowed_origins.split(',') {
        let origin = origin.trim();
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_service=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let db_pool = create_pool(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool created with {} max connections",
        config.database.max_connections
    );

    run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    let schema = build_schema(db_pool);

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("GraphQL endpoint listening on http://{}/graphql", bind_addr);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_config))
            .app_data(web::Data::new(schema.clone()))
            .route("/graphql", web::post().to(graphql_handler))
            .route("/graphql", web::get().to(graphiql_handler))
            .route("/schema", web::get().to(schema_handler))
            .route("/", web::get().to(index_handler))
            .route("/health", web::get().to(health_handler))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
