use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use axum::{middleware, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    cli_args::CliArgs,
    error::ErrorVerbosity,
    middleware::{
        method_not_allowed::method_not_allowed, not_found::not_found,
        trace_response_body::trace_response_body,
    },
    route,
    state::ApiState,
    upload::{invoker::ScriptInvoker, scheduler::UploadScheduler},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// How the upload script is run after an outfit submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    pub interpreter: String,
    pub script: PathBuf,
    pub delay_ms: u64,
}

impl UploaderConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            script: PathBuf::from("upload_video_to_firebase.py"),
            delay_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    socket_address: SocketAddr,
    error_verbosity: ErrorVerbosity,
    uploader: UploaderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3000),
            error_verbosity: ErrorVerbosity::default(),
            uploader: UploaderConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(
        socket_address: SocketAddr,
        error_verbosity: ErrorVerbosity,
        uploader: UploaderConfig,
    ) -> Self {
        Self {
            socket_address,
            error_verbosity,
            uploader,
        }
    }

    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the config file named by the arguments, if any, and applies the overrides.
    pub async fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let config = match &args.config_file {
            Some(path) => Self::from_config_file(path).await?,
            None => Self::default(),
        };

        Ok(match args.port {
            Some(port) => config.with_port(port),
            None => config,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.socket_address.set_port(port);
        self
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }

    pub fn uploader(&self) -> &UploaderConfig {
        &self.uploader
    }
}

/// Builds the complete application for `state`.
pub fn app(state: ApiState) -> Router {
    route::app()
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            method_not_allowed::<ApiState>,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace_response_body::<ApiState>,
        ))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let uploader = &self.config.uploader;
        let invoker = ScriptInvoker::new(uploader.interpreter.clone(), uploader.script.clone());

        tracing::info!(
            interpreter = %invoker.interpreter(),
            script = %invoker.script().display(),
            delay = ?uploader.delay(),
            "Configured upload script"
        );

        let uploads = UploadScheduler::new(Arc::new(invoker), uploader.delay());
        let state = ApiState::new(self.config.error_verbosity, uploads.clone());

        let app = app(state);

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        uploads.drain().await;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("SIGTERM received");
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
