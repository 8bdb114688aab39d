//! Configuration management for the artist lookup.
//!
//! This module loads `.env` files, reads the Spotify client credentials and
//! resolves the endpoints the client talks to. Values come from:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current directory
//! 3. `.env` in the local data directory
//! 4. Built-in defaults (endpoints and timeout only)

use std::{env, fmt, path::PathBuf, time::Duration};

use crate::{Error, Res, warning};

/// Default Spotify Web API base URL.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Default Spotify accounts token endpoint.
pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// The current directory is tried first, then `spotlookup/.env` inside the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/spotlookup/.env`
/// - macOS: `~/Library/Application Support/spotlookup/.env`
/// - Windows: `%LOCALAPPDATA%/spotlookup/.env`
///
/// Variables already present in the process environment are never
/// overwritten. Missing files are not an error; an unreadable or malformed
/// file is.
///
/// # Example
///
/// ```
/// use spotlookup::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Res<()> {
    if let Ok(path) = dotenv::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
        log::debug!("Loaded environment from {}", path.display());
    }

    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlookup/.env");
    path
}

/// Spotify application credentials used for the client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `CLIENT_ID` and `CLIENT_SECRET` from the process environment.
    ///
    /// Missing values are replaced by empty strings after a warning; the token
    /// endpoint then rejects the request with an authentication error.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the credentials through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| match lookup(key) {
            Some(value) => value,
            None => {
                warning!("{} is not set, authentication will fail", key);
                String::new()
            }
        };

        let client_id = read("CLIENT_ID");
        let client_secret = read("CLIENT_SECRET");
        Credentials {
            client_id,
            client_secret,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Endpoint and transport settings for [`crate::spotify::SpotifyClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub api_url: String,
    pub token_url: String,
    pub timeout: Duration,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        SpotifyConfig {
            api_url: SPOTIFY_API_URL.to_string(),
            token_url: SPOTIFY_API_TOKEN_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SpotifyConfig {
    /// Builds the configuration from `SPOTIFY_API_URL`,
    /// `SPOTIFY_API_TOKEN_URL` and `SPOTIFY_HTTP_TIMEOUT_SECS`, falling back to
    /// the public Spotify endpoints and a 10 second timeout.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = match lookup("SPOTIFY_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    Error::Config(format!("SPOTIFY_HTTP_TIMEOUT_SECS=\"{}\": {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(Error::Config(
                        "SPOTIFY_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(SpotifyConfig {
            api_url: lookup("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            token_url: lookup("SPOTIFY_API_TOKEN_URL").unwrap_or(defaults.token_url),
            timeout,
        })
    }
}
