//! Wire types for the completion service's `generateContent` endpoint.
//!
//! The service wraps model output in candidate/content/part layers; the
//! actual ordering reply is a JSON document embedded in the first text
//! part and parsed separately as [`OrderingReply`].

use serde::{Deserialize, Serialize};

/// Request body for a `generateContent` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for ordering requests.
    pub contents: Vec<Content>,
    /// Output constraints: JSON mime type and the reply schema.
    pub generation_config: GenerationConfig,
}

/// A single conversation turn.
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    /// Ordered message parts.
    pub parts: Vec<Part>,
}

/// One part of a turn; only text parts are used.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    /// Text payload.
    pub text: String,
}

/// Output configuration requesting structured JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response mime type, always `application/json`.
    pub response_mime_type: String,
    /// JSON schema the reply must follow.
    pub response_schema: serde_json::Value,
}

/// Response body of a `generateContent` call.
///
/// Unknown fields (safety ratings, usage metadata) are ignored.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    /// Ranked candidate replies; may be absent on blocked prompts.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single candidate reply.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// Reply content; absent when generation was cut off.
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
    }
}

/// The ordering reply embedded in the oracle's text output.
///
/// Field names follow the camelCase contract the prompt demands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingReply {
    /// Stop ids in suggested visiting order.
    pub ordered_ids: Vec<String>,
    /// Short free-text rationale.
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_unwraps_candidate_layers() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"orderedIds\":[],\"explanation\":\"x\"}"}], "role": "model"}}
            ],
            "usageMetadata": {"totalTokenCount": 42}
        }"#;

        let response: GenerateContentResponse =
            serde_json::from_str(json).expect("should deserialise");

        assert_eq!(
            response.first_text(),
            Some(r#"{"orderedIds":[],"explanation":"x"}"#)
        );
    }

    #[test]
    fn first_text_is_none_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str("{}").expect("should deserialise");
        assert!(response.first_text().is_none());
    }

    #[test]
    fn first_text_is_none_when_content_missing() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse =
            serde_json::from_str(json).expect("should deserialise");
        assert!(response.first_text().is_none());
    }

    #[test]
    fn ordering_reply_uses_camel_case_ids() {
        let reply: OrderingReply =
            serde_json::from_str(r#"{"orderedIds": ["2", "1"], "explanation": "B then A"}"#)
                .expect("should deserialise");
        assert_eq!(reply.ordered_ids, vec!["2", "1"]);
        assert_eq!(reply.explanation, "B then A");
    }

    #[test]
    fn ordering_reply_rejects_wrong_shape() {
        let result: Result<OrderingReply, _> =
            serde_json::from_str(r#"{"orderedIds": "2,1", "explanation": "oops"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_serialises_generation_config_in_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "prompt".into(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: serde_json::json!({"type": "OBJECT"}),
            },
        };

        let body = serde_json::to_value(&request).expect("should serialise");

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt");
    }
}
