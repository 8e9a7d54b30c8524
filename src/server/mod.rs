// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! HTTP and WebSocket transport.
//!
//! Two routes share one [`Dispatcher`]:
//!
//! * `POST <once_path>` takes a single request as the body and answers with
//!   one response frame.
//! * `GET <websocket_path>` upgrades to a WebSocket session that answers
//!   each incoming message with one text frame, in order.

mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::error::transport::TransportError;
use crate::error::LanaiResult;

pub use handlers::{handle_once, handle_ws, respond};

/// State shared by every route.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide dispatcher
    pub dispatcher: Arc<Dispatcher>,

    /// Largest accepted request, for HTTP bodies and WebSocket messages alike
    pub max_message_size: usize,
}

/// Builds the router for `config`, serving requests through `dispatcher`.
pub fn router(dispatcher: Arc<Dispatcher>, config: &ServerConfig) -> Router {
    let state = AppState {
        dispatcher,
        max_message_size: config.max_message_size,
    };

    Router::new()
        .route(&config.once_path, post(handle_once))
        .route(&config.websocket_path, get(handle_ws))
        .layer(DefaultBodyLimit::max(config.max_message_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A bound listener plus the router it serves.
pub struct Server {
    listener: TcpListener,
    router: Router,
    name: String,
}

impl Server {
    /// Binds the configured address. Port `0` picks a free port; see
    /// [`Server::local_addr`].
    pub async fn bind(config: &ServerConfig, dispatcher: Arc<Dispatcher>) -> LanaiResult<Self> {
        let listener = TcpListener::bind(config.address)
            .await
            .map_err(|source| TransportError::Bind {
                address: config.address,
                source,
            })?;

        Ok(Self {
            listener,
            router: router(dispatcher, config),
            name: config.name.clone(),
        })
    }

    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> LanaiResult<SocketAddr> {
        Ok(self
            .listener
            .local_addr()
            .map_err(TransportError::LocalAddr)?)
    }

    /// Serves connections until `shutdown` resolves, then drains in-flight
    /// requests and returns.
    pub async fn run_until<F>(self, shutdown: F) -> LanaiResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server {
            listener,
            router,
            name,
        } = self;

        match listener.local_addr() {
            Ok(address) => info!(server = %name, %address, "listening"),
            Err(err) => warn!(error = ?err, "failed to read local address"),
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(TransportError::Serve)?;

        info!(server = %name, "server stopped");
        Ok(())
    }

    /// Serves connections until the process receives ctrl-c.
    pub async fn run_until_ctrl_c(self) -> LanaiResult<()> {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "failed to install ctrl-c handler");
            }
        })
        .await
    }
}
