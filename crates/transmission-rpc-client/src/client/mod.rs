//! Transmission RPC client implementation.

use std::{fmt, time::Duration};

use parking_lot::RwLock;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use transmission_rpc_types::{Method, TransmissionError};

use crate::config::{ClientConfig, DEFAULT_MAX_RETRIES, DEFAULT_RPC_URL, normalize_max_retries};
use crate::envelope::{RpcRequest, RpcResponse};
use crate::transport::{self, HttpRequest, RpcTransport, SESSION_ID_HEADER};

mod queue;
mod session;
mod torrent;


const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_CONFLICT: u16 = 409;

/// TransmissionClient talks to a Transmission daemon over its RPC endpoint.
///
/// The client keeps the session id the daemon hands out and presents it on
/// every request. When the daemon answers 409 the new id is stored and the
/// request is sent again, up to the configured retry budget.
///
/// The session id sits behind a lock, so one client can be shared between
/// tasks. Concurrent renewals overwrite each other; each retry presents the id
/// from its own 409.
pub struct TransmissionClient<T: RpcTransport = reqwest::Client> {
    transport: T,
    url: Url,
    credentials: Option<(String, String)>,
    session_id: RwLock<Option<String>>,
    max_retries: u32,
    timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl TransmissionClient {
    /// Start configuring a client that uses [`reqwest::Client`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for `rpc_url` with default settings.
    pub fn new(rpc_url: &str) -> Result<Self, TransmissionError> {
        Self::builder().url(rpc_url).build()
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransmissionError> {
        Self::builder().config(config).build()
    }

    /// Create a client and fetch a session id right away.
    ///
    /// Fails if the daemon cannot be reached.
    pub async fn connect(rpc_url: &str) -> Result<Self, TransmissionError> {
        let client = Self::new(rpc_url)?;
        debug!("Connecting to Transmission RPC at {}", client.url);
        client.ping().await?;
        debug!("Connected to Transmission Daemon");
        Ok(client)
    }
}

impl<T: RpcTransport> TransmissionClient<T> {
    /// The RPC endpoint.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Dispatch attempts allowed per call.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// The session id currently presented to the daemon.
    pub fn session_id(&self) -> Option<String> {
        self.session_id.read().clone()
    }

    /// Token that aborts in-flight and future calls of this client when
    /// cancelled. Cancellation is permanent; to abort a single call use
    /// [`TransmissionClient::request_with_cancel`].
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Perform one RPC call and return the successful response envelope.
    ///
    /// Use this for methods without a typed wrapper. Errors are terminal; a
    /// stale session id is retried internally and only surfaces as
    /// [`TransmissionError::Session`] once the budget is spent.
    pub async fn request<A: Serialize>(
        &self,
        request: RpcRequest<A>,
    ) -> Result<RpcResponse, TransmissionError> {
        self.dispatch(request, None).await
    }

    /// Like [`TransmissionClient::request`], also aborted when `cancel` is
    /// cancelled. Only this call is affected; the client stays usable.
    pub async fn request_with_cancel<A: Serialize>(
        &self,
        request: RpcRequest<A>,
        cancel: &CancellationToken,
    ) -> Result<RpcResponse, TransmissionError> {
        self.dispatch(request, Some(cancel)).await
    }

    async fn dispatch<A: Serialize>(
        &self,
        request: RpcRequest<A>,
        call_cancel: Option<&CancellationToken>,
    ) -> Result<RpcResponse, TransmissionError> {
        let method = request.method();
        let body = request.to_vec()?;
        let attempts = if request.retries_avoided() {
            1
        } else {
            self.max_retries
        };

        let exchange = self.exchange(method, body, attempts);
        let bounded = async {
            match self.timeout {
                Some(timeout) => match tokio::time::timeout(timeout, exchange).await {
                    Ok(result) => result,
                    Err(_) => {
                        debug!("{method} timed out after {timeout:?}");
                        Err(TransmissionError::Cancelled)
                    }
                },
                None => exchange.await,
            }
        };
        let call_cancelled = async {
            match call_cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("{method} cancelled");
                Err(TransmissionError::Cancelled)
            }
            _ = call_cancelled => {
                debug!("{method} cancelled by caller");
                Err(TransmissionError::Cancelled)
            }
            result = bounded => result,
        }
    }

    /// Probe the daemon to obtain a session id.
    ///
    /// Sends a request the daemon does not understand, without retrying. A
    /// healthy daemon answers with a 409 (which hands out the id) or, when the
    /// id is already valid, with an error result. Both count as success here.
    pub async fn ping(&self) -> Result<(), TransmissionError> {
        match self.request(RpcRequest::new(Method::Ping).avoid_retry()).await {
            Ok(_) | Err(TransmissionError::Session { .. } | TransmissionError::Rpc(_)) => {
                debug!("Ping done, session id present: {}", self.session_id.read().is_some());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Send `method` with `arguments`, discarding the response payload.
    pub(crate) async fn call<A: Serialize>(
        &self,
        method: Method,
        arguments: A,
    ) -> Result<(), TransmissionError> {
        self.request(RpcRequest::new(method).with_arguments(arguments))
            .await
            .map(|_| ())
    }

    async fn exchange(
        &self,
        method: Method,
        body: Vec<u8>,
        attempts: u32,
    ) -> Result<RpcResponse, TransmissionError> {
        let mut session_id = self.session_id.read().clone();

        for attempt in 1..=attempts {
            debug!("Sending {method} (attempt {attempt}/{attempts})");
            let request = self.http_request(body.clone(), session_id.as_deref())?;
            let response = self.transport.post(request).await?;

            match response.status {
                STATUS_CONFLICT => {
                    if let Some(renewed) = response.session_id {
                        debug!("Daemon issued a new session id");
                        *self.session_id.write() = Some(renewed.clone());
                        session_id = Some(renewed);
                    }
                }
                STATUS_UNAUTHORIZED => return Err(TransmissionError::Unauthorized),
                status => return classify(method, status, &response.body),
            }
        }

        warn!("{method}: session id still rejected after {attempts} attempt(s)");
        Err(TransmissionError::Session { attempts })
    }

    fn http_request(
        &self,
        body: Vec<u8>,
        session_id: Option<&str>,
    ) -> Result<HttpRequest, TransmissionError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(transport::USER_AGENT),
        );
        if let Some(id) = session_id {
            let value = HeaderValue::from_str(id).map_err(|e| {
                TransmissionError::Transport(format!("unusable session id header: {e}"))
            })?;
            headers.insert(SESSION_ID_HEADER, value);
        }

        Ok(HttpRequest {
            url: self.url.clone(),
            headers,
            basic_auth: self.credentials.clone(),
            body,
        })
    }
}

/// Turns a non-conflict response into the call outcome.
fn classify(method: Method, status: u16, body: &[u8]) -> Result<RpcResponse, TransmissionError> {
    let response = RpcResponse::from_slice(body)?;
    if !response.is_success() {
        debug!("{method} rejected by daemon: {}", response.result);
        return Err(TransmissionError::Rpc(response.result));
    }
    if !(200..300).contains(&status) {
        return Err(TransmissionError::UnexpectedStatus(status));
    }
    Ok(response)
}

impl<T: RpcTransport> fmt::Debug for TransmissionClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransmissionClient")
            .field("url", &self.url.as_str())
            .field(
                "username",
                &self.credentials.as_ref().map(|(username, _)| username),
            )
            .field("max_retries", &self.max_retries)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TransmissionClient`].
#[allow(missing_debug_implementations)]
pub struct ClientBuilder<T = reqwest::Client> {
    transport: T,
    url: String,
    username: String,
    password: String,
    max_retries: u32,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

impl ClientBuilder {
    /// Defaults: `http://localhost:9091/transmission/rpc`, no credentials,
    /// two attempts per call, no deadline.
    pub fn new() -> Self {
        Self {
            transport: reqwest::Client::new(),
            url: DEFAULT_RPC_URL.to_string(),
            username: String::new(),
            password: String::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: None,
            cancel: None,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ClientBuilder<T> {
    /// RPC endpoint, e.g. `http://localhost:9091/transmission/rpc`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Basic auth credentials. Only sent when both are non-empty.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Dispatch attempts per call. Values below 1 select the default of 2,
    /// values above 10 are clamped to 10.
    pub fn max_retries(mut self, max_retries: i64) -> Self {
        self.max_retries = normalize_max_retries(max_retries);
        self
    }

    /// Deadline for each call, retries included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Token that cancels every call of the built client.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Apply every setting of `config`.
    pub fn config(self, config: &ClientConfig) -> Self {
        let mut builder = self.url(config.url.clone()).max_retries(config.max_retries);
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.basic_auth(username.clone(), password.clone());
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// Use a custom HTTP transport.
    pub fn transport<U: RpcTransport>(self, transport: U) -> ClientBuilder<U> {
        ClientBuilder {
            transport,
            url: self.url,
            username: self.username,
            password: self.password,
            max_retries: self.max_retries,
            timeout: self.timeout,
            cancel: self.cancel,
        }
    }
}

impl<T: RpcTransport> ClientBuilder<T> {
    /// Validate the settings and create the client.
    pub fn build(self) -> Result<TransmissionClient<T>, TransmissionError> {
        let url = Url::parse(&self.url)
            .map_err(|e| TransmissionError::InvalidUrl(format!("{}: {e}", self.url)))?;

        let credentials = (!self.username.is_empty() && !self.password.is_empty())
            .then_some((self.username, self.password));

        Ok(TransmissionClient {
            transport: self.transport,
            url,
            credentials,
            session_id: RwLock::new(None),
            max_retries: self.max_retries,
            timeout: self.timeout,
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}
