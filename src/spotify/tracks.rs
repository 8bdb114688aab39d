use crate::{
    Res,
    spotify::{HttpTransport, SpotifyClient},
    types::{AccessToken, Track},
};

impl<T: HttpTransport> SpotifyClient<T> {
    /// Fetches a single track by Spotify id, including the markets it is
    /// available in.
    pub fn get_track(&self, token: &AccessToken, track_id: &str) -> Res<Track> {
        self.get_json(token, &format!("/tracks/{}", track_id), &[])
    }
}
