#![allow(dead_code)]

use std::time::Duration;

use mockall::mock;
use reqwest::Method;
use serde_json::{Value, json};
use spotlookup::{
    Res,
    config::{Credentials, SpotifyConfig},
    spotify::{ApiRequest, ApiResponse, HttpTransport, SpotifyClient},
};

pub const API_URL: &str = "https://api.spotify.test/v1";
pub const TOKEN_URL: &str = "https://accounts.spotify.test/api/token";
pub const TOKEN: &str = "BQC-test-token";

// "client:secret" in standard base64
pub const BASIC_FIXTURE: &str = "Basic Y2xpZW50OnNlY3JldA==";

mock! {
    pub Transport {}

    impl HttpTransport for Transport {
        fn send(&self, request: &ApiRequest) -> Res<ApiResponse>;
    }
}

pub fn test_config() -> SpotifyConfig {
    SpotifyConfig {
        api_url: API_URL.to_string(),
        token_url: TOKEN_URL.to_string(),
        timeout: Duration::from_secs(10),
    }
}

pub fn client(transport: MockTransport) -> SpotifyClient<MockTransport> {
    SpotifyClient::new(
        test_config(),
        Credentials::new("client", "secret"),
        transport,
    )
}

pub fn expect_token(mock: &mut MockTransport) {
    mock.expect_send()
        .withf(|req| req.method == Method::POST && req.url == TOKEN_URL)
        .times(1)
        .returning(|_| {
            Ok(ApiResponse::new(
                200,
                json!({
                    "access_token": TOKEN,
                    "token_type": "Bearer",
                    "expires_in": 3600
                })
                .to_string(),
            ))
        });
}

pub fn expect_get(mock: &mut MockTransport, path: &str, status: u16, body: Value) {
    let url = format!("{}{}", API_URL, path);
    mock.expect_send()
        .withf(move |req| req.method == Method::GET && req.url == url)
        .times(1)
        .returning(move |_| Ok(ApiResponse::new(status, body.to_string())));
}

pub fn search_body(artists: Value) -> Value {
    let total = artists.as_array().map(|a| a.len()).unwrap_or(0);
    json!({
        "artists": {
            "href": "https://api.spotify.test/v1/search?query=x&type=artist&offset=0&limit=1",
            "items": artists,
            "limit": 1,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": total
        }
    })
}

pub fn tove_lo() -> Value {
    json!({
        "id": "4NHQUGzhtTLFvgF5SZesLK",
        "name": "Tove Lo",
        "genres": ["pop", "swedish electropop"],
        "popularity": 74,
        "type": "artist"
    })
}

pub fn top_tracks_body() -> Value {
    json!({
        "tracks": [
            { "id": "1", "name": "Song A", "popularity": 80 },
            { "id": "2", "name": "Song B", "popularity": 71 }
        ]
    })
}
