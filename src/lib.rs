//! Spotify Artist Lookup Library
//!
//! This library answers a handful of questions about an artist using the
//! Spotify Web API: the canonical artist name, the Spotify artist id, the most
//! popular track, and the markets that track is available in. Authentication
//! uses the client-credentials grant, so no user interaction with Spotify is
//! needed.
//!
//! # Modules
//!
//! - `cli` - Interactive prompts and the mode selection logic
//! - `config` - Environment loading, credentials and endpoint configuration
//! - `error` - The crate-wide error type
//! - `spotify` - Spotify Web API client and HTTP transport
//! - `types` - Data structures decoded from API responses
//!
//! # Example
//!
//! ```
//! use spotlookup::{cli, config, spotify::SpotifyClient};
//!
//! fn main() -> spotlookup::Res<()> {
//!     config::load_env()?;
//!     let client = SpotifyClient::from_env()?;
//!     let answer = cli::lookup(&client, "Tove Lo", "artist_id")?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible function in the crate returns this alias so errors can be
/// propagated with `?` up to the binary, which reports them once.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the binary should reach for
/// this; library code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Lookup failed: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable conditions the user should notice, such as missing
/// credentials or an artist search without results.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
