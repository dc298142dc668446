use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcStatus {
    Ok,
    Error,
}

/// Envelope returned by every admin RPC: `status`, `message`, `data`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RpcEnvelope<T> {
    pub status: RpcStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> RpcEnvelope<T> {
    /// An error envelope becomes `Error::Rpc` carrying the server message;
    /// an ok envelope yields its payload, which may legitimately be null.
    pub fn into_result(self) -> Result<Option<T>> {
        match self.status {
            RpcStatus::Ok => Ok(self.data),
            RpcStatus::Error => Err(Error::Rpc(
                self.message
                    .unwrap_or_else(|| "Backend returned an error".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_yields_payload() {
        let envelope: RpcEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"status":"ok","message":"done","data":[1,2]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn ok_envelope_with_null_data_is_not_an_error() {
        let envelope: RpcEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"status":"ok","data":null}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), None);
    }

    #[test]
    fn error_envelope_carries_server_message() {
        let envelope: RpcEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"status":"error","message":"vendor not found"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Backend error: vendor not found");
    }
}
