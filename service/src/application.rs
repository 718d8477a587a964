// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::clock::Clock;
use crate::configuration::ServiceOptions;
use crate::constants::MARKETPLACE_ID_PARAM;
use crate::errors::AppError;
use crate::routes;
use axum::Router;
use axum::routing::get;
use axum::serve::Serve;
use flex_signer::{EndpointKind, SigningCredentials};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Immutable per-process state shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub host: String,
    pub credentials: SigningCredentials,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(options: &ServiceOptions, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        Ok(Self {
            host: options.render_host.clone(),
            credentials: options.credentials()?,
            clock,
        })
    }
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(options: &ServiceOptions, state: AppState) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", options.bind, options.port);
        let listener = TcpListener::bind(address).await?;
        let server = run(listener, state)?;
        let port = server.local_addr()?.port();

        tracing::info!("[service] listening at http://{}:{}", options.bind, port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Builds the router with both signing routes and the health check.
///
/// The signing route templates come from [`EndpointKind::path`], the same
/// function the signer uses for the canonical request.
pub fn create_router(state: AppState) -> Router {
    let accept = EndpointKind::Accept.path(MARKETPLACE_ID_PARAM);
    let challenge = EndpointKind::Challenge.path(MARKETPLACE_ID_PARAM);

    Router::new()
        .route("/health", get(routes::health))
        .route(&accept, get(routes::accept))
        .route(&challenge, get(routes::challenge))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

#[tracing::instrument(skip(listener, state))]
pub fn run(
    listener: TcpListener,
    state: AppState,
) -> Result<Serve<TcpListener, Router, Router>, std::io::Error> {
    let app = create_router(state);
    Ok(axum::serve(listener, app))
}
