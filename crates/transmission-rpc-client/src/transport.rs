//! The HTTP boundary of the client.
//!
//! [`RpcTransport`] is the one operation the executor needs from an HTTP
//! stack: POST a body, get back status, session id header and body. It is
//! implemented for [`reqwest::Client`] and can be implemented for anything
//! else, which is also how the executor is tested.

use reqwest::header::HeaderMap;
use url::Url;

use transmission_rpc_types::TransmissionError;

/// Header carrying the session id in both directions.
pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("transmission-rpc/", env!("CARGO_PKG_VERSION"));

/// One POST to the RPC endpoint.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The RPC endpoint.
    pub url: Url,
    /// Content type, user agent and, once known, the session id.
    pub headers: HeaderMap,
    /// Username and password, present only when both are non-empty.
    pub basic_auth: Option<(String, String)>,
    /// Serialized request envelope.
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// The session id this request presents, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.headers
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
    }
}

/// What came back from the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the session id header, if the daemon sent one.
    pub session_id: Option<String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Trait that abstracts the HTTP round trip.
/// This allows plugging in a custom client, and mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub trait RpcTransport {
    /// Send `request` and read the whole response.
    ///
    /// Only failures to complete the exchange are errors. Any HTTP status,
    /// including 409, is a successful round trip.
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransmissionError>;
}

impl RpcTransport for reqwest::Client {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransmissionError> {
        let mut builder = reqwest::Client::post(self, request.url)
            .headers(request.headers)
            .body(request.body);
        if let Some((username, password)) = request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let session_id = response
            .headers()
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(HttpResponse {
            status,
            session_id,
            body,
        })
    }
}

/// Maps reqwest errors to transport errors, keeping the cause chain.
fn map_reqwest_error(err: reqwest::Error) -> TransmissionError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TransmissionError::Transport(message)
}
