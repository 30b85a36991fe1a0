//! Request and response envelopes.
//!
//! Every call is wrapped as `{method, arguments, tag}` and every answer as
//! `{result, arguments, tag}`. The shape of `arguments` depends on the method,
//! so responses are decoded in two hops: first into [`RpcResponse`] with the
//! arguments kept as an untyped [`Value`], then from that value (or one of its
//! keys) into the type the caller asked for.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use transmission_rpc_types::{Method, TransmissionError};

/// The `result` value of a successful call.
pub const RESULT_SUCCESS: &str = "success";

/// Outgoing envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<A = ()> {
    method: Method,

    #[serde(skip_serializing_if = "Option::is_none")]
    arguments: Option<A>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<i64>,

    #[serde(skip)]
    avoid_retry: bool,
}

impl RpcRequest {
    /// A request without arguments.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            arguments: None,
            tag: None,
            avoid_retry: false,
        }
    }
}

impl<A> RpcRequest<A> {
    /// Attach the method specific arguments.
    pub fn with_arguments<B>(self, arguments: B) -> RpcRequest<B> {
        RpcRequest {
            method: self.method,
            arguments: Some(arguments),
            tag: self.tag,
            avoid_retry: self.avoid_retry,
        }
    }

    /// Attach a tag. The daemon echoes it back in the response.
    pub fn with_tag(mut self, tag: i64) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Give up on the first session id conflict instead of retrying.
    pub fn avoid_retry(mut self) -> Self {
        self.avoid_retry = true;
        self
    }

    /// The method this request invokes.
    pub fn method(&self) -> Method {
        self.method
    }

    pub(crate) fn retries_avoided(&self) -> bool {
        self.avoid_retry
    }
}

impl<A: Serialize> RpcRequest<A> {
    /// Serialize the envelope to its wire form.
    pub fn to_vec(&self) -> Result<Vec<u8>, TransmissionError> {
        serde_json::to_vec(self).map_err(TransmissionError::Encoding)
    }
}

/// Incoming envelope, with `arguments` still untyped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    /// `"success"`, or a message describing why the daemon refused the call.
    /// A `null` result reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: String,

    /// Method specific payload.
    #[serde(default = "empty_object")]
    pub arguments: Value,

    /// Echo of the request tag, if one was sent.
    #[serde(default)]
    pub tag: Option<i64>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RpcResponse {
    /// First hop: decode the raw body into the envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self, TransmissionError> {
        serde_json::from_slice(body).map_err(TransmissionError::Serialization)
    }

    /// Whether the daemon accepted the call.
    pub fn is_success(&self) -> bool {
        self.result == RESULT_SUCCESS
    }

    /// Second hop: decode the whole `arguments` object.
    ///
    /// A missing or `null` payload yields `T::default()`.
    pub fn decode_arguments<T>(&self) -> Result<T, TransmissionError>
    where
        T: DeserializeOwned + Default,
    {
        decode_value(&self.arguments)
    }

    /// Second hop: decode `arguments[key]`.
    ///
    /// An absent key is how the daemon answers with an empty result, so it
    /// yields `T::default()` rather than an error.
    pub fn decode_key<T>(&self, key: &str) -> Result<T, TransmissionError>
    where
        T: DeserializeOwned + Default,
    {
        match self.arguments.get(key) {
            Some(value) => decode_value(value),
            None => Ok(T::default()),
        }
    }

    /// Like [`RpcResponse::decode_key`], using the first of `keys` present.
    pub fn decode_first_key<T>(&self, keys: &[&str]) -> Result<T, TransmissionError>
    where
        T: DeserializeOwned + Default,
    {
        match keys.iter().find_map(|key| self.arguments.get(*key)) {
            Some(value) => decode_value(value),
            None => Ok(T::default()),
        }
    }
}

fn decode_value<T>(value: &Value) -> Result<T, TransmissionError>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    T::deserialize(value).map_err(TransmissionError::Serialization)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;
    use transmission_rpc_types::{Filter, FreeSpace, Ids, Method, Torrent, TransmissionError};

    use super::{RpcRequest, RpcResponse};

    #[test]
    fn request_without_arguments_omits_them() {
        let body = RpcRequest::new(Method::SessionStats).to_vec().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "method": "session-stats" }));
    }

    #[test]
    fn request_carries_arguments_and_tag() {
        let request = RpcRequest::new(Method::TorrentStop)
            .with_arguments(Filter::from(Ids::from(vec![1_i64, 2])))
            .with_tag(7);
        let value: serde_json::Value = serde_json::from_slice(&request.to_vec().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({ "method": "torrent-stop", "arguments": { "ids": [1, 2] }, "tag": 7 })
        );
    }

    #[test]
    fn avoid_retry_is_not_serialized() {
        let request = RpcRequest::new(Method::Ping).avoid_retry();
        assert!(request.retries_avoided());
        let value: serde_json::Value = serde_json::from_slice(&request.to_vec().unwrap()).unwrap();
        assert_eq!(value, json!({ "method": "ping" }));
    }

    #[test]
    fn unserializable_arguments_are_an_encoding_error() {
        let mut arguments = BTreeMap::new();
        arguments.insert(vec![1u8, 2], 3);
        let err = RpcRequest::new(Method::TorrentSet)
            .with_arguments(arguments)
            .to_vec()
            .unwrap_err();
        assert!(matches!(err, TransmissionError::Encoding(_)));
    }

    #[test]
    fn malformed_envelope_is_a_serialization_error() {
        let err = RpcResponse::from_slice(b"<>").unwrap_err();
        assert!(matches!(err, TransmissionError::Serialization(_)));
    }

    #[test]
    fn missing_arguments_decode_as_default() {
        let response = RpcResponse::from_slice(br#"{"result":"success"}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.decode_arguments::<FreeSpace>().unwrap(), FreeSpace::default());
        assert!(response.decode_key::<Vec<Torrent>>("torrents").unwrap().is_empty());
    }

    #[test]
    fn absent_key_is_not_an_error() {
        let response = RpcResponse::from_slice(br#"{"result":"success","arguments":{}}"#).unwrap();
        let torrents: Vec<Torrent> = response.decode_key("torrents").unwrap();
        assert!(torrents.is_empty());
    }

    #[test]
    fn first_present_key_wins() {
        let response = RpcResponse::from_slice(
            br#"{"result":"success","arguments":{"torrent-duplicate":{"id":5,"name":"dup"}}}"#,
        )
        .unwrap();
        let torrent: Torrent = response
            .decode_first_key(&["torrent-added", "torrent-duplicate"])
            .unwrap();
        assert_eq!(torrent.id, 5);
        assert_eq!(torrent.name, "dup");
    }

    #[test]
    fn shape_mismatch_is_a_serialization_error() {
        let response =
            RpcResponse::from_slice(br#"{"result":"success","arguments":{"torrents":{"id":"x"}}}"#)
                .unwrap();
        let err = response.decode_key::<Vec<Torrent>>("torrents").unwrap_err();
        assert!(matches!(err, TransmissionError::Serialization(_)));
    }

    #[test]
    fn null_result_is_not_success() {
        let response = RpcResponse::from_slice(br#"{"result":null,"arguments":{}}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.result, "");
    }

    #[test]
    fn tag_is_echoed() {
        let response = RpcResponse::from_slice(br#"{"result":"error","tag":9}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.tag, Some(9));
    }
}
