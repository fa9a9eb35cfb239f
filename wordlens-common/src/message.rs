//! Message contract between the capture/display clients and the backend.

use serde::{Deserialize, Serialize};

use crate::types::ImageResultSet;

/// A request from a client, dispatched on its `action` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ClientRequest {
    /// Translate the captured word and fetch stock photos for it
    TranslateAndFetchImages { query: String },
    /// Step the image history cursor backward
    GoBack,
    /// Step the image history cursor forward
    GoForward,
}

/// The backend's answer: an image set, a history position (possibly
/// exhausted), or a human-readable error. Never an unhandled fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientResponse {
    Error { error: String },
    Images { images: Option<ImageResultSet> },
}

impl ClientResponse {
    pub fn images(set: ImageResultSet) -> Self {
        Self::Images { images: Some(set) }
    }

    /// History navigation result; `None` when the cursor cannot move
    pub fn history(set: Option<ImageResultSet>) -> Self {
        Self::Images { images: set }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_action_tags() {
        let req: ClientRequest =
            serde_json::from_str(r#"{"action":"translateAndFetchImages","query":"hola"}"#)
                .unwrap();
        assert_eq!(
            req,
            ClientRequest::TranslateAndFetchImages {
                query: "hola".to_string()
            }
        );

        let back: ClientRequest = serde_json::from_str(r#"{"action":"goBack"}"#).unwrap();
        assert_eq!(back, ClientRequest::GoBack);

        let forward: ClientRequest = serde_json::from_str(r#"{"action":"goForward"}"#).unwrap();
        assert_eq!(forward, ClientRequest::GoForward);
    }

    #[test]
    fn test_response_shapes() {
        let ok = serde_json::to_string(&ClientResponse::images(Vec::new())).unwrap();
        assert_eq!(ok, r#"{"images":[]}"#);

        let exhausted = serde_json::to_string(&ClientResponse::history(None)).unwrap();
        assert_eq!(exhausted, r#"{"images":null}"#);

        let err = serde_json::to_string(&ClientResponse::error("rate limited")).unwrap();
        assert_eq!(err, r#"{"error":"rate limited"}"#);
    }

    #[test]
    fn test_response_untagged_roundtrip() {
        let err: ClientResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(err, ClientResponse::error("boom"));

        let images: ClientResponse = serde_json::from_str(r#"{"images":null}"#).unwrap();
        assert_eq!(images, ClientResponse::history(None));
    }
}
