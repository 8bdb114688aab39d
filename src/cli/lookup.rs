use crate::{
    Error, Res,
    spotify::{HttpTransport, SpotifyClient},
    types::{Answer, Mode, Track},
};

/// Answers a single question about an artist.
///
/// Requests a token, searches for `artist_name` and then, depending on
/// `mode`, issues at most one more request:
///
/// | Mode                | Extra request          | Answer                         |
/// |---------------------|------------------------|--------------------------------|
/// | `artist_name`       | artist by id           | artist name                    |
/// | `artist_id`         | none                   | artist id from the search      |
/// | `most_popular_song` | top tracks             | name of the first top track    |
/// | `song_countries`    | top tracks, then track | markets of the first top track |
///
/// Any other mode yields [`Answer::InvalidParameter`] once the artist has been
/// found.
///
/// # Errors
///
/// - `Error::ArtistNotFound` - The search had no results
/// - `Error::NoTopTracks` - A track mode was requested for an artist without
///   top tracks
/// - Any error from the token exchange or the API calls
pub fn lookup<T: HttpTransport>(
    client: &SpotifyClient<T>,
    artist_name: &str,
    mode: &str,
) -> Res<Answer> {
    let token = client.request_token()?;

    let artist = match client.search_artist(&token, artist_name)? {
        Some(artist) => artist,
        None => return Err(Error::ArtistNotFound(artist_name.to_string())),
    };

    let mode: Mode = match mode.parse() {
        Ok(mode) => mode,
        Err(e) => {
            log::debug!("{}", e);
            return Ok(Answer::InvalidParameter);
        }
    };

    match mode {
        Mode::ArtistName => Ok(Answer::Text(client.get_artist_name(&token, &artist.id)?)),
        Mode::ArtistId => Ok(Answer::Text(artist.id)),
        Mode::MostPopularSong => {
            let top = most_popular(client.get_top_tracks(&token, &artist.id)?, &artist.id)?;
            Ok(Answer::Text(top.name))
        }
        Mode::SongCountries => {
            let top = most_popular(client.get_top_tracks(&token, &artist.id)?, &artist.id)?;
            let track = client.get_track(&token, &top.id)?;
            Ok(Answer::Markets(track.available_markets))
        }
    }
}

fn most_popular(tracks: Vec<Track>, artist_id: &str) -> Res<Track> {
    tracks
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoTopTracks(artist_id.to_string()))
}
