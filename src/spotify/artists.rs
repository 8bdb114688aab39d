use crate::{
    Res,
    spotify::{HttpTransport, SpotifyClient},
    types::{AccessToken, Artist, SearchResponse, TopTracksResponse, Track},
};

/// Market used for the top-tracks lookup.
pub const TOP_TRACKS_MARKET: &str = "US";

impl<T: HttpTransport> SpotifyClient<T> {
    /// Searches the catalog for an artist by free-text name.
    ///
    /// Uses the `/search` endpoint with `type=artist` and `limit=1`, so only
    /// Spotify's best match is considered.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Artist))` - The first matching artist
    /// - `Ok(None)` - The search returned no artists
    /// - `Err(Error::Api)` - Spotify rejected the request (e.g. expired token)
    ///
    /// # Example
    ///
    /// ```
    /// let token = client.request_token()?;
    /// if let Some(artist) = client.search_artist(&token, "Tove Lo")? {
    ///     println!("{} ({})", artist.name, artist.id);
    /// }
    /// ```
    pub fn search_artist(&self, token: &AccessToken, artist_name: &str) -> Res<Option<Artist>> {
        let response: SearchResponse = self.get_json(
            token,
            "/search",
            &[("q", artist_name), ("type", "artist"), ("limit", "1")],
        )?;

        log::debug!(
            "Search for {:?} matched {} artist(s)",
            artist_name,
            response.artists.total.unwrap_or(response.artists.items.len() as u64)
        );

        Ok(response.artists.items.into_iter().next())
    }

    /// Fetches the canonical name of an artist by Spotify id.
    pub fn get_artist_name(&self, token: &AccessToken, artist_id: &str) -> Res<String> {
        let artist: Artist = self.get_json(token, &format!("/artists/{}", artist_id), &[])?;
        Ok(artist.name)
    }

    /// Fetches the artist's top tracks in the US market.
    ///
    /// Spotify returns up to ten tracks ordered by popularity, most popular
    /// first; the order is kept as is.
    pub fn get_top_tracks(&self, token: &AccessToken, artist_id: &str) -> Res<Vec<Track>> {
        let response: TopTracksResponse = self.get_json(
            token,
            &format!("/artists/{}/top-tracks", artist_id),
            &[("country", TOP_TRACKS_MARKET)],
        )?;
        Ok(response.tracks)
    }
}
