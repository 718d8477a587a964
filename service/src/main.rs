// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use clap::Parser;
use signature_service::application::{AppState, Application};
use signature_service::clock::SystemClock;
use signature_service::configuration::ServiceOptions;
use std::{io::Error, sync::Arc};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        .with_ansi(false)
        .with_target(false)
        .init();

    // get configuration options from .env and environment variables
    ServiceOptions::load_env_file(None);
    let options = ServiceOptions::parse();

    tracing::info!("[service] {:?}", &options);

    let state = AppState::new(&options, Arc::new(SystemClock)).map_err(|e| {
        tracing::error!("[service] {}", e);
        Error::from(e)
    })?;

    let application = Application::build(&options, state).await?;

    application.run_until_stopped().await
}
