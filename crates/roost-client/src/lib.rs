use http::{
    HeaderValue, Method, Request, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use iso8601_timestamp::Timestamp;
use roost_http_client::Client as HttpClient;
use roost_type::authorizer::{GetAuthUrlRequest, GetAuthUrlResponse};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::future::Future;
use tracing::instrument;

pub use self::error::{BoxError, Error, Result};

mod error;

/// Fixed basic-auth username every consumer of the authorizer identifies with
///
/// The per-client part of the credential pair is the secret, not the username.
pub const USERNAME: &str = "pigeon";

/// Credentials for one registered client of the authorizer
///
/// Read-only for the lifetime of the client. The calling service owns loading
/// and storing these; the shape deserialises straight out of its config file.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Credentials {
    /// Base URL of the authorizer, with or without a trailing slash
    pub host: SmolStr,
    /// Basic-auth password shared between this client and the authorizer
    pub secret: SmolStr,
    /// Name the client is registered under, sent in the form body
    pub client_name: SmolStr,
}

/// A freshly issued authorization URL
#[derive(Clone, Debug)]
pub struct AuthUrlGrant {
    /// URL the end user has to be redirected to
    pub url: String,
    /// Point in time the URL stops being accepted, if the server reports one
    pub expire_at: Option<Timestamp>,
}

/// Capability of obtaining an authorization URL for an end user
///
/// Abstracted over so callers can swap the network-backed [`Client`] for a
/// test double.
pub trait RequestAuthUrl: Send + Sync + 'static {
    type Error: Into<BoxError>;

    /// Request a single-use authorization URL for `user_id`
    ///
    /// `user_id` must be non-empty. A non-empty `redirect_uri` is forwarded to
    /// the authorizer; `None` (or an empty string) omits the field entirely.
    ///
    /// Every call is one fresh round trip to the authorizer, nothing is
    /// cached or retried.
    fn request_auth_url(
        &self,
        user_id: &str,
        redirect_uri: Option<&str>,
    ) -> impl Future<Output = Result<AuthUrlGrant, Self::Error>> + Send;
}

/// Network-backed authorizer client
#[derive(Clone)]
pub struct Client {
    authorization: HeaderValue,
    credentials: Credentials,
    http_client: HttpClient,
}

impl Client {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http_client(credentials, HttpClient::default())
    }

    /// Build a client on top of a caller-supplied HTTP client
    ///
    /// This is the seam the tests inject their mock transports through.
    #[allow(clippy::missing_panics_doc)] // Base64 output is always a valid header value. It won't panic.
    #[must_use]
    pub fn with_http_client(credentials: Credentials, http_client: HttpClient) -> Self {
        let token = base64_simd::STANDARD
            .encode_to_string(format!("{USERNAME}:{}", credentials.secret));
        let mut authorization = HeaderValue::try_from(format!("Basic {token}"))
            .expect("Failed to build authorization header");
        authorization.set_sensitive(true);

        Self {
            authorization,
            credentials,
            http_client,
        }
    }
}

impl RequestAuthUrl for Client {
    type Error = Error;

    #[instrument(skip(self))]
    async fn request_auth_url(
        &self,
        user_id: &str,
        redirect_uri: Option<&str>,
    ) -> Result<AuthUrlGrant> {
        let form = serde_urlencoded::to_string(GetAuthUrlRequest {
            client: &self.credentials.client_name,
            client_user_id: user_id,
            redirect_uri: redirect_uri.filter(|uri| !uri.is_empty()),
        })?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("{}/url", self.credentials.host.trim_end_matches('/')))
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .header(AUTHORIZATION, self.authorization.clone())
            .body(form.into())?;

        let response = self.http_client.execute(request).await?;

        // Non-200 short-circuits everything, the body isn't even read
        if response.status() != StatusCode::OK {
            return Err(Error::RequestFailed(response.status()));
        }

        let bytes = response.bytes().await?;
        let response: GetAuthUrlResponse = sonic_rs::from_slice(&bytes)?;

        if response.auth_url.is_empty() {
            return Err(Error::EmptyAuthUrl);
        }

        Ok(AuthUrlGrant {
            url: response.auth_url,
            expire_at: response.expire_at,
        })
    }
}
