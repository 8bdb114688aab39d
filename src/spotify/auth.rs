use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::{
    Error, Res,
    config::Credentials,
    spotify::{ApiRequest, ApiResponse, HttpTransport, SpotifyClient, authorization},
    types::{AccessToken, AuthErrorBody, TokenResponse},
};

/// Encodes the credentials as an HTTP Basic authorization value.
///
/// Returns `Basic ` followed by the standard base64 encoding of
/// `"<client_id>:<client_secret>"`, as required by the token endpoint for the
/// client-credentials grant.
///
/// # Example
///
/// ```
/// let creds = Credentials::new("client", "secret");
/// assert_eq!(basic_auth_header(&creds), "Basic Y2xpZW50OnNlY3JldA==");
/// ```
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw.as_bytes()))
}

/// Builds the `Authorization: Bearer <token>` header mapping sent with every
/// Web API request.
pub fn bearer_auth_header(token: &AccessToken) -> Res<HeaderMap> {
    authorization(&format!("Bearer {}", token.value))
}

impl<T: HttpTransport> SpotifyClient<T> {
    /// Exchanges the application credentials for a bearer token.
    ///
    /// Performs the OAuth 2.0 client-credentials grant against the configured
    /// token endpoint. No user interaction is involved and the resulting
    /// token only grants access to public catalog data.
    ///
    /// # Returns
    ///
    /// - `Ok(AccessToken)` - Bearer token and the instant it expires
    /// - `Err(Error::Auth)` - The accounts service rejected the credentials
    /// - `Err(Error::Http)` - Network failure or timeout
    /// - `Err(Error::Decode)` - The success body was not a token response
    /// - `Err(Error::InvalidToken)` - The token lifetime is out of range
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::from_env()?;
    /// let token = client.request_token()?;
    /// println!("Token valid until {}", token.expires_at);
    /// ```
    pub fn request_token(&self) -> Res<AccessToken> {
        let mut headers = authorization(&basic_auth_header(self.credentials()))?;
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let request = ApiRequest::post(self.config().token_url.clone())
            .headers(headers)
            .form("grant_type", "client_credentials");

        log::debug!("{} {}", request.method, request.url);
        let response = self.transport().send(&request)?;
        if !response.is_success() {
            return Err(auth_error(&response));
        }

        let body: TokenResponse = serde_json::from_str(&response.body)?;
        let token = AccessToken::from_response(body, Utc::now())?;
        log::debug!("Obtained access token valid until {}", token.expires_at);

        Ok(token)
    }
}

fn auth_error(response: &ApiResponse) -> Error {
    let message = match serde_json::from_str::<AuthErrorBody>(&response.body) {
        Ok(body) => match body.error_description {
            Some(description) => format!("{}: {}", body.error, description),
            None => body.error,
        },
        Err(_) => response.body.trim().to_string(),
    };

    Error::Auth {
        status: response.status,
        message,
    }
}
