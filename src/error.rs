use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode Spotify response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Token endpoint returned an invalid token: {0}")]
    InvalidToken(String),

    #[error("No artist found for \"{0}\"")]
    ArtistNotFound(String),

    #[error("Artist {0} has no top tracks")]
    NoTopTracks(String),

    #[error("Unknown mode \"{0}\"")]
    UnknownMode(String),
}
