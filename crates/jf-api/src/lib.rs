use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::header::{HeaderValue, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use jf_common::logging::{init_tracing, install_panic_hook};

pub mod error;
pub mod handlers;

use error::ApiError;
use handlers::{analyze, health};

#[derive(Debug, Clone, Parser)]
#[command(name = "jf-api", about = "HTTP API for the jobfit scoring engine")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "JF_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(ApiError::BadRequest(
                "JF_CORS_ORIGINS must list explicit origins".into(),
            ));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 3001,
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new().route("/analyze", post(analyze::analyze));

    Router::new()
        .route("/livez", get(health::livez))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(256 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub fn test_state() -> SharedState {
    Arc::new(AppState {
        config: AppConfig::for_tests(),
    })
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_tracing(env!("CARGO_PKG_NAME"));
    install_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;

    let state = Arc::new(AppState {
        config: config.clone(),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state);

    info!(%addr, "jf-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let cli = Cli {
            port: 3001,
            cors_origins: "http://localhost:3000 , https://app.example.com,".into(),
        };

        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(
            config.cors_origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://app.example.com".to_string()
            ]
        );
    }

    #[test]
    fn wildcard_cors_origin_is_rejected() {
        let cli = Cli {
            port: 3001,
            cors_origins: "*".into(),
        };

        assert!(matches!(
            AppConfig::from_cli(cli),
            Err(ApiError::BadRequest(_))
        ));
    }
}
