//! # CLI Module
//!
//! The user-facing layer: collects the artist name and mode (from flags or
//! interactive prompts), drives the lookup against Spotify and hands the
//! answer back to the binary for printing.
//!
//! ## Data Flow
//!
//! 1. **Input**: artist name and mode, prompting for whatever was not passed
//!    on the command line
//! 2. **Client**: build a [`SpotifyClient`] from the environment
//! 3. **Lookup**: token, artist search, then at most one more request
//! 4. **Output**: an [`Answer`] the caller prints on a single line
//!
//! ```bash
//! spotlookup                                   # prompts for both values
//! spotlookup --artist "Tove Lo" --mode artist_id
//! spotlookup -a "Tove Lo" -m song_countries
//! ```

mod lookup;
mod prompt;

use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

pub use lookup::lookup;
pub use prompt::{ARTIST_PROMPT, MODE_HEADER, MODE_PROMPT, ask_artist, ask_mode, prompt};

use crate::{Error, Res, spotify::SpotifyClient, types::Answer, warning};

/// Resolves the inputs, prompting on stdin for any that are missing.
pub fn resolve_inputs<R: BufRead, W: Write>(
    artist: Option<String>,
    mode: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Res<(String, String)> {
    let artist = match artist {
        Some(artist) => artist,
        None => ask_artist(input, output)?,
    };
    let mode = match mode {
        Some(mode) => mode,
        None => ask_mode(input, output)?,
    };
    Ok((artist, mode))
}

/// Runs one lookup end to end against the real Spotify API.
pub fn run(artist: Option<String>, mode: Option<String>) -> Res<Answer> {
    let (artist, mode) = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        resolve_inputs(artist, mode, &mut stdin.lock(), &mut stdout.lock())?
    };

    let client = SpotifyClient::from_env()?;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Looking up {}...", artist));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    finish_lookup(&pb, lookup(&client, &artist, &mode))
}

/// Clears the spinner, then prints the notice for a search without matches.
pub fn finish_lookup(pb: &ProgressBar, answer: Res<Answer>) -> Res<Answer> {
    pb.finish_and_clear();

    if let Err(Error::ArtistNotFound(_)) = &answer {
        warning!("No artists");
    }

    answer
}
