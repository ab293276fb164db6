use forum_actix::api::openapi::ApiDoc;
use forum_actix::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use forum_actix::auth::application::ports::outgoing::token_provider::TokenProvider;
use forum_actix::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use forum_actix::comment::application::comment_use_cases::CommentUseCases;
use forum_actix::comment::application::services::{
    CreateCommentService, DeleteCommentService, GetCommentsService, UpdateCommentService,
};
use forum_actix::shared::api::custom_json_config;
use forum_actix::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use forum_actix::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicsService, UpdateTopicService,
};
use forum_actix::topic::application::topic_use_cases::TopicUseCases;
use forum_actix::{init_routes, AppState};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting forum API...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;
    let host = env::var("HOST").context("HOST is not set in .env file")?;
    let port = env::var("PORT").context("PORT is not set in .env file")?;

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    // Topics
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic = TopicUseCases {
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        create: Arc::new(CreateTopicService::new(topic_repo.clone())),
        update: Arc::new(UpdateTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        delete: Arc::new(DeleteTopicService::new(topic_query.clone(), topic_repo)),
    };

    // Comments
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment = CommentUseCases {
        get_list: Arc::new(GetCommentsService::new(
            topic_query.clone(),
            comment_query.clone(),
        )),
        create: Arc::new(CreateCommentService::new(
            topic_query,
            comment_repo.clone(),
        )),
        update: Arc::new(UpdateCommentService::new(
            comment_query.clone(),
            comment_repo.clone(),
        )),
        delete: Arc::new(DeleteCommentService::new(comment_query, comment_repo)),
    };

    let state = AppState { topic, comment };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
