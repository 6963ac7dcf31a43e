use serde::{de::DeserializeOwned, ser::SerializeStruct, Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{ClientError, Result};

pub static FALLBACK_ERROR_MESSAGE: &str = "Request failed";
pub const UNKNOWN_STATUS: u16 = 500;

/// Error body returned by the catalog service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a catalog call. Operations never return `Err`; every failure
/// is folded into [`ClientResult::Failure`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClientResult {
    /// `data` is `Value::Null` when the response body was empty.
    Success {
        status: u16,
        data: Value,
    },
    Failure {
        status: u16,
        error: String,
        data: Value,
    },
}

impl ClientResult {
    pub fn success(status: u16, data: Value) -> Self {
        ClientResult::Success { status, data }
    }

    pub fn failure<S: Into<String>>(status: u16, error: S, data: Value) -> Self {
        ClientResult::Failure {
            status,
            error: error.into(),
            data,
        }
    }

    /// Normalize a non-2xx response. The remote `message` wins, then the
    /// generic status message.
    pub fn from_error_response(status: u16, data: Value) -> Self {
        let message = remote_message(&data)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        Self::failure(status, message, data)
    }

    /// Normalize a failure where no response was received.
    pub fn from_transport_error(err: &ClientError) -> Self {
        let message = err.to_string();
        let message = if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::failure(UNKNOWN_STATUS, message, Value::Null)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ClientResult::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            ClientResult::Success { status, .. } | ClientResult::Failure { status, .. } => *status,
        }
    }

    pub fn data(&self) -> &Value {
        match self {
            ClientResult::Success { data, .. } | ClientResult::Failure { data, .. } => data,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ClientResult::Success { .. } => None,
            ClientResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn into_data(self) -> Value {
        match self {
            ClientResult::Success { data, .. } | ClientResult::Failure { data, .. } => data,
        }
    }

    /// Decode the payload into a caller-defined type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data().clone()).map_err(ClientError::Json)
    }
}

impl Serialize for ClientResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ClientResult::Success { status, data } => {
                let mut state = serializer.serialize_struct("ClientResult", 3)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("status", status)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            ClientResult::Failure {
                status,
                error,
                data,
            } => {
                let mut state = serializer.serialize_struct("ClientResult", 4)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("status", status)?;
                state.serialize_field("error", error)?;
                state.serialize_field("data", data)?;
                state.end()
            }
        }
    }
}

/// JSON when it parses, the raw text when it doesn't, null when empty.
pub fn decode_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn remote_message(data: &Value) -> Option<String> {
    serde_json::from_value::<ErrorResponse>(data.clone())
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}
