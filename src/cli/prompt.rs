use std::io::{BufRead, Write};

use crate::Res;

pub const ARTIST_PROMPT: &str = "Please, input artist name: ";
pub const MODE_HEADER: &str = "Please, input one of the parameters ";
pub const MODE_PROMPT: &str =
    "\"artist_name\", \"artist_id\", \"most_popular_song\" or \"song_countries\": ";

/// Writes `prompt` without a newline and reads one line of input.
///
/// Surrounding whitespace, including the line terminator, is stripped. End
/// of input yields an empty string.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Res<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn ask_artist<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Res<String> {
    prompt(input, output, ARTIST_PROMPT)
}

pub fn ask_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Res<String> {
    writeln!(output, "{}", MODE_HEADER)?;
    prompt(input, output, MODE_PROMPT)
}
