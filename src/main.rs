use anyhow::{Context, Result};
use rango::application::{
    ports::{
        search::ContentSearch, session::VisitSessionCodec, time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use rango::config::{AppConfig, SearchConfig};
use rango::domain::{category::CategoryRepository, page::PageRepository};
use rango::infrastructure::{
    database,
    repositories::{PostgresCategoryRepository, PostgresPageRepository},
    search::{DisabledContentSearch, WebhoseContentSearch},
    security::visit_cookie::HmacVisitSessionCodec,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use rango::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let page_repo: Arc<dyn PageRepository> = Arc::new(PostgresPageRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let content_search = content_search(config.search())?;
    let visit_codec: Arc<dyn VisitSessionCodec> = Arc::new(
        HmacVisitSessionCodec::new(config.session_secret())
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET cannot key the visit cookie"))?,
    );

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        page_repo,
        clock,
        slugger,
        content_search,
        visit_codec,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(
        state,
        RouterSettings {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: Some(config.rate_limit()),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    // The rate limiter keys on the peer address, so connect info is required.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn content_search(settings: &SearchConfig) -> Result<Arc<dyn ContentSearch>> {
    match &settings.api_key {
        Some(key) => {
            let search =
                WebhoseContentSearch::new(&settings.endpoint, key.clone(), settings.timeout)?;
            tracing::info!(endpoint = %search.endpoint(), "web search enabled");
            Ok(Arc::new(search))
        }
        None => {
            tracing::warn!("WEBHOSE_API_KEY not set; web search disabled");
            Ok(Arc::new(DisabledContentSearch))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
