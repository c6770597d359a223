#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use bytes::Bytes;
use const_format::concatcp;
use http::{HeaderValue, header::USER_AGENT};
use http_body::Body as HttpBody;
use http_body_util::{BodyExt, Limited};
use hyper::{
    HeaderMap, Request, Response as HyperResponse, StatusCode, Uri, Version,
    header::HeaderName,
};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::{client::legacy::Client as HyperClient, rt::TokioExecutor};
use serde::de::DeserializeOwned;
use std::{error::Error as StdError, fmt, time::Duration};
use tower::{
    BoxError, Service, ServiceBuilder, ServiceExt,
    layer::util::Identity,
    util::{BoxCloneSyncService, Either},
};
use tower_http::{
    decompression::DecompressionLayer,
    follow_redirect::FollowRedirectLayer,
    map_response_body::MapResponseBodyLayer,
    timeout::TimeoutLayer,
};

mod body;

type BoxBody<E = BoxError> = http_body_util::combinators::BoxBody<Bytes, E>;
type Result<T, E = Error> = std::result::Result<T, E>;

/// Default body limit of 1MB
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Default request timeout of 30s (same as Firefox)
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str =
    concatcp!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Alias for our internal HTTP body type
pub use self::body::Body;

/// Response body type
pub type ResponseBody = BoxBody;

/// Client error type
pub struct Error {
    inner: BoxError,
}

impl Error {
    #[inline]
    fn new<E>(inner: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: inner.into(),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl StdError for Error {}

/// Builder for the HTTP client
pub struct ClientBuilder {
    content_length_limit: Option<usize>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Set the content length limit
    ///
    /// This is enforced at the body level, regardless of whether the `Content-Type` header is set or not.
    ///
    /// Defaults to 1MB
    #[must_use]
    pub fn content_length_limit(self, content_length_limit: Option<usize>) -> Self {
        Self {
            content_length_limit,
            ..self
        }
    }

    /// Set a default header
    ///
    /// These headers are added to every HTTP request that is sent via this client
    ///
    /// # Errors
    ///
    /// - The header name failed to convert
    /// - The header value failed to convert
    pub fn default_header<K, V>(mut self, key: K, value: V) -> Result<Self>
    where
        K: TryInto<HeaderName>,
        K::Error: Into<BoxError>,
        V: TryInto<HeaderValue>,
        V::Error: Into<BoxError>,
    {
        self.default_headers.insert(
            key.try_into().map_err(Error::new)?,
            value.try_into().map_err(Error::new)?,
        );

        Ok(self)
    }

    /// Set the User-Agent header
    ///
    /// Defaults to `roost-http-client`
    ///
    /// # Errors
    ///
    /// - The header value failed to convert
    pub fn user_agent<V>(self, value: V) -> Result<Self>
    where
        V: TryInto<HeaderValue>,
        V::Error: Into<BoxError>,
    {
        self.default_header(USER_AGENT, value)
    }

    /// Set a timeout
    ///
    /// Defaults to 30s
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    /// Build the HTTP client
    ///
    /// Yes, this operation is infallible
    #[must_use]
    pub fn build(self) -> Client {
        let connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .expect("Failed to fetch native certificates")
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = HyperClient::builder(TokioExecutor::new())
            .build(connector)
            .map_response(|resp| {
                let (parts, body) = resp.into_parts();
                let body = BoxBody::new(body);
                HyperResponse::from_parts(parts, body)
            });

        self.service(client)
    }

    /// Build the HTTP client by wrapping another HTTP client service
    #[must_use]
    pub fn service<S, B>(self, client: S) -> Client
    where
        S: Service<Request<Body>, Response = HyperResponse<B>> + Clone + Send + Sync + 'static,
        S::Error: StdError + Send + Sync + 'static,
        S::Future: Send + 'static,
        B: HttpBody + Default + Send + Sync + 'static,
        B::Data: Send + Sync,
        B::Error: StdError + Send + Sync + 'static,
    {
        let content_length_limit = self.content_length_limit.map_or_else(
            || Either::Left(MapResponseBodyLayer::new(BoxBody::new)),
            |limit| {
                Either::Right(MapResponseBodyLayer::new(move |body| {
                    BoxBody::new(Limited::new(body, limit))
                }))
            },
        );
        let timeout = self.timeout.map_or_else(
            || Either::Left(Identity::new()),
            |duration| Either::Right(TimeoutLayer::new(duration)),
        );

        Client {
            default_headers: self.default_headers,
            inner: BoxCloneSyncService::new(
                ServiceBuilder::new()
                    .layer(content_length_limit)
                    .layer(FollowRedirectLayer::new())
                    .layer(DecompressionLayer::default())
                    .layer(timeout)
                    .service(client)
                    .map_err(BoxError::from),
            ),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        let builder = ClientBuilder {
            content_length_limit: Some(DEFAULT_BODY_LIMIT),
            default_headers: HeaderMap::default(),
            timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        };

        builder.user_agent(DEFAULT_USER_AGENT).unwrap()
    }
}

#[derive(Clone)]
/// An opinionated HTTP client
pub struct Client {
    default_headers: HeaderMap,
    inner: BoxCloneSyncService<Request<Body>, HyperResponse<BoxBody>, BoxError>,
}

impl Client {
    /// Build a new client
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn prepare_request(&self, mut req: Request<Body>) -> Request<Body> {
        req.headers_mut().extend(self.default_headers.clone());
        req
    }

    /// Execute an HTTP request
    ///
    /// # Errors
    ///
    /// - The inner client service isn't ready
    /// - The request failed
    pub async fn execute(&self, req: Request<Body>) -> Result<Response> {
        let req = self.prepare_request(req);

        let ready_svc = self.inner.clone();
        let response = ready_svc.oneshot(req).await.map_err(Error::new)?;

        Ok(Response { inner: response })
    }

    /// Shorthand for creating a GET request
    ///
    /// # Errors
    ///
    /// - Creating the request with the provided URL failed
    /// - Request execution failed
    pub async fn get<U>(&self, uri: U) -> Result<Response>
    where
        Uri: TryFrom<U>,
        <Uri as TryFrom<U>>::Error: Into<http::Error>,
    {
        let req = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .map_err(Error::new)?;

        self.execute(req).await
    }
}

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

/// HTTP response
#[derive(Debug)]
pub struct Response {
    inner: HyperResponse<BoxBody>,
}

impl Response {
    /// Convert the response into its inner `hyper` representation
    #[must_use]
    pub fn into_inner(self) -> HyperResponse<BoxBody> {
        self.inner
    }

    /// Read the body into a `Bytes`
    ///
    /// # Errors
    ///
    /// Reading the body from the remote failed
    pub async fn bytes(self) -> Result<Bytes> {
        Ok(self.inner.collect().await.map_err(Error::new)?.to_bytes())
    }

    /// Get a reference to the headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Read the body and attempt to interpret it as a UTF-8 encoded string
    ///
    /// # Errors
    ///
    /// - Reading the body from the remote failed
    /// - The body isn't a UTF-8 encoded string
    pub async fn text(self) -> Result<String> {
        let body = self.bytes().await?;
        simdutf8::basic::from_utf8(&body)
            .map(ToOwned::to_owned)
            .map_err(Error::new)
    }

    /// Read the body and deserialise it as JSON into a `serde` enabled structure
    ///
    /// # Errors
    ///
    /// - Reading the body from the remote failed
    /// - Deserialising the body into the structure failed
    pub async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.bytes().await?;
        sonic_rs::from_slice(&bytes).map_err(Error::new)
    }

    /// Get the status of the request
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Get the HTTP version the client used
    #[must_use]
    pub fn version(&self) -> Version {
        self.inner.version()
    }
}
