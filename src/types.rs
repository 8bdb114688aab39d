use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Res};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Bearer token obtained from the client-credentials grant.
///
/// `expires_at` is informational only; tokens are requested once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Fails when `expires_in` does not fit a date after `obtained_at`.
    pub fn from_response(response: TokenResponse, obtained_at: DateTime<Utc>) -> Res<Self> {
        let expires_at = i64::try_from(response.expires_in)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| obtained_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                Error::InvalidToken(format!("expires_in out of range: {}", response.expires_in))
            })?;

        Ok(AccessToken {
            value: response.access_token,
            expires_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub available_markets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: Paging<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

/// Error payload returned by `api.spotify.com`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub status: u16,
    pub message: String,
}

/// Error payload returned by the accounts service token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthErrorBody {
    pub error: String,
    pub error_description: Option<String>,
}

/// Message shown for an unrecognised mode.
pub const INVALID_PARAMETER_MESSAGE: &str =
    "You probably input wrong parameter or unexisting artist! Try again.";

/// What the user asked to learn about the artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ArtistName,
    ArtistId,
    MostPopularSong,
    SongCountries,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::ArtistName,
        Mode::ArtistId,
        Mode::MostPopularSong,
        Mode::SongCountries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ArtistName => "artist_name",
            Mode::ArtistId => "artist_id",
            Mode::MostPopularSong => "most_popular_song",
            Mode::SongCountries => "song_countries",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

/// Result of a lookup, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Markets(Vec<String>),
    InvalidParameter,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{}", text),
            Answer::Markets(markets) => {
                let json = serde_json::to_string(markets).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
            Answer::InvalidParameter => write!(f, "{}", INVALID_PARAMETER_MESSAGE),
        }
    }
}
