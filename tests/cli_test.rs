use std::{io::Cursor, time::Duration};

use indicatif::ProgressBar;

use spotlookup::{
    Error,
    cli::{self, ARTIST_PROMPT, MODE_HEADER, MODE_PROMPT},
    config::{Credentials, SpotifyConfig},
    types::{Answer, Mode},
};

#[test]
fn test_prompt_trims_input() {
    let mut input = Cursor::new("  Tove Lo \r\n");
    let mut output = Vec::new();

    let value = cli::prompt(&mut input, &mut output, "Name: ").unwrap();

    assert_eq!(value, "Tove Lo");
    assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
}

#[test]
fn test_prompt_at_end_of_input() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    assert_eq!(cli::prompt(&mut input, &mut output, "> ").unwrap(), "");
}

#[test]
fn test_resolve_inputs_prompts_for_both() {
    let mut input = Cursor::new("Tove Lo\nartist_id\n");
    let mut output = Vec::new();

    let (artist, mode) = cli::resolve_inputs(None, None, &mut input, &mut output).unwrap();

    assert_eq!(artist, "Tove Lo");
    assert_eq!(mode, "artist_id");
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{}{}\n{}", ARTIST_PROMPT, MODE_HEADER, MODE_PROMPT)
    );
}

#[test]
fn test_resolve_inputs_skips_given_values() {
    let mut input = Cursor::new("song_countries\n");
    let mut output = Vec::new();

    let (artist, mode) =
        cli::resolve_inputs(Some("Robyn".to_string()), None, &mut input, &mut output).unwrap();

    assert_eq!(artist, "Robyn");
    assert_eq!(mode, "song_countries");
    assert!(!String::from_utf8(output).unwrap().contains(ARTIST_PROMPT));
}

#[test]
fn test_mode_parsing() {
    for mode in Mode::ALL {
        assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        assert_eq!(mode.to_string(), mode.as_str());
    }

    assert!(matches!(
        "song countries".parse::<Mode>(),
        Err(Error::UnknownMode(m)) if m == "song countries"
    ));
}

#[test]
fn test_answer_display() {
    assert_eq!(Answer::Text("Song A".to_string()).to_string(), "Song A");
    assert_eq!(Answer::Markets(vec![]).to_string(), "[]");
    assert_eq!(
        Answer::Markets(vec!["SE".to_string()]).to_string(),
        r#"["SE"]"#
    );
}

#[test]
fn test_markets_display_is_json() {
    let markets = vec!["US".to_string(), "A\u{1}\"B".to_string()];
    let shown = Answer::Markets(markets.clone()).to_string();

    assert_eq!(shown, r#"["US","A\u0001\"B"]"#);
    assert_eq!(serde_json::from_str::<Vec<String>>(&shown).unwrap(), markets);
}

#[test]
fn test_finish_lookup_clears_spinner_and_keeps_result() {
    let pb = ProgressBar::hidden();
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = cli::finish_lookup(&pb, Err(Error::ArtistNotFound("nobody".to_string())));

    assert!(pb.is_finished());
    assert!(matches!(result, Err(Error::ArtistNotFound(name)) if name == "nobody"));

    let pb = ProgressBar::hidden();
    let answer = cli::finish_lookup(&pb, Ok(Answer::Text("Song A".to_string()))).unwrap();

    assert!(pb.is_finished());
    assert_eq!(answer, Answer::Text("Song A".to_string()));
}

#[test]
fn test_credentials_from_lookup() {
    let creds = Credentials::from_lookup(|key| match key {
        "CLIENT_ID" => Some("id".to_string()),
        "CLIENT_SECRET" => Some("shh".to_string()),
        _ => None,
    });

    assert_eq!(creds, Credentials::new("id", "shh"));
}

#[test]
fn test_missing_credentials_become_empty() {
    let creds = Credentials::from_lookup(|_| None);

    assert_eq!(creds.client_id, "");
    assert_eq!(creds.client_secret, "");
}

#[test]
fn test_credentials_debug_redacts_secret() {
    let debug = format!("{:?}", Credentials::new("id", "top-secret"));

    assert!(debug.contains("id"));
    assert!(!debug.contains("top-secret"));
}

#[test]
fn test_spotify_config_defaults() {
    let config = SpotifyConfig::from_lookup(|_| None).unwrap();

    assert_eq!(config, SpotifyConfig::default());
    assert_eq!(config.api_url, "https://api.spotify.com/v1");
    assert_eq!(config.token_url, "https://accounts.spotify.com/api/token");
    assert_eq!(config.timeout.as_secs(), 10);
}

#[test]
fn test_spotify_config_overrides() {
    let config = SpotifyConfig::from_lookup(|key| match key {
        "SPOTIFY_API_URL" => Some("http://localhost:9000/v1/".to_string()),
        "SPOTIFY_API_TOKEN_URL" => Some("http://localhost:9000/token".to_string()),
        "SPOTIFY_HTTP_TIMEOUT_SECS" => Some("3".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.token_url, "http://localhost:9000/token");
    assert_eq!(config.timeout.as_secs(), 3);
}

#[test]
fn test_spotify_config_rejects_bad_timeout() {
    let result = SpotifyConfig::from_lookup(|key| {
        (key == "SPOTIFY_HTTP_TIMEOUT_SECS").then(|| "soon".to_string())
    });

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_spotify_config_rejects_zero_timeout() {
    let result = SpotifyConfig::from_lookup(|key| {
        (key == "SPOTIFY_HTTP_TIMEOUT_SECS").then(|| "0".to_string())
    });

    assert!(matches!(result, Err(Error::Config(m)) if m.contains("greater than 0")));
}
