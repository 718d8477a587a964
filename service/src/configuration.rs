// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use flex_signer::SigningCredentials;

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_RENDER_HOST, PLACEHOLDER_ACCESS_KEY,
    PLACEHOLDER_SECRET_KEY, SECRET_KEY_ENV,
};
use crate::errors::AppError;

/// Service options, read from flags or the environment.
///
/// The secret key is only read from `AWS_SECRET_KEY` (the environment or a
/// `.env` file) so it never shows up in the process list.
#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServiceOptions {
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS, env("BIND_ADDRESS"))]
    pub bind: String,
    #[arg(long, default_value_t = DEFAULT_PORT, env("PORT"))]
    pub port: u16,
    /// Value signed as the `host` header
    #[arg(long, default_value = DEFAULT_RENDER_HOST, env("RENDER_HOST"))]
    pub render_host: String,
    #[arg(long, default_value = PLACEHOLDER_ACCESS_KEY, env("AWS_ACCESS_KEY"))]
    pub access_key: String,
    #[arg(skip = secret_key_from_env())]
    pub secret_key: String,
    /// Refuse to start while placeholder credentials are in effect
    #[arg(long, default_value = "false", env("REQUIRE_CREDENTIALS"), action = ArgAction::SetTrue)]
    pub require_credentials: bool,
}

fn secret_key_from_env() -> String {
    std::env::var(SECRET_KEY_ENV).unwrap_or_else(|_| PLACEHOLDER_SECRET_KEY.to_string())
}

impl ServiceOptions {
    /// Loads variables from a `.env` file into the process environment.
    ///
    /// With no `path` the file is searched for from the working directory
    /// upwards. Variables already set in the environment win. Returns the
    /// file that was loaded, if any.
    pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
        let result = match path {
            Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
            None => dotenvy::dotenv(),
        };

        match result {
            Ok(path) => {
                tracing::info!("[service] loaded environment from {}", path.display());
                Some(path)
            }
            Err(e) if e.not_found() => None,
            Err(e) => {
                tracing::warn!("[service] unable to load .env file: {}", e);
                None
            }
        }
    }

    /// Names of the credential variables still holding placeholder values.
    pub fn placeholder_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.access_key.is_empty() || self.access_key == PLACEHOLDER_ACCESS_KEY {
            missing.push("AWS_ACCESS_KEY");
        }
        if self.secret_key.is_empty() || self.secret_key == PLACEHOLDER_SECRET_KEY {
            missing.push("AWS_SECRET_KEY");
        }
        missing
    }

    /// Builds the signing credentials.
    ///
    /// Placeholder credentials are accepted with a warning unless
    /// `require_credentials` is set.
    pub fn credentials(&self) -> Result<SigningCredentials, AppError> {
        let missing = self.placeholder_credentials();
        if !missing.is_empty() {
            if self.require_credentials {
                return Err(AppError::ConfigError(format!(
                    "{} not set",
                    missing.join(", ")
                )));
            }
            tracing::warn!(
                "[service] {} not set, signing with placeholder credentials",
                missing.join(", ")
            );
        }

        Ok(SigningCredentials::new(
            self.access_key.as_str(),
            self.secret_key.as_str(),
        ))
    }
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceOptions")
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("render_host", &self.render_host)
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("require_credentials", &self.require_credentials)
            .finish()
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        ServiceOptions {
            bind: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            render_host: DEFAULT_RENDER_HOST.to_string(),
            access_key: PLACEHOLDER_ACCESS_KEY.to_string(),
            secret_key: PLACEHOLDER_SECRET_KEY.to_string(),
            require_credentials: false,
        }
    }
}
