//! Response Decoding
//!
//! Turns `(status, body)` pairs into typed records or an [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ChatReply, MutationResponse};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `error` field of a JSON body, if any
fn error_field(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

fn failure(status: u16, body: &str) -> ApiError {
    match error_field(body) {
        Some(message) => ApiError::Rejected(message),
        None => ApiError::Http { status, message: None },
    }
}

/// Decode a successful body into `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(failure(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

pub const REJECTED_FALLBACK_TEXT: &str = "Request failed";

/// Decode the body of a mutating endpoint. `success: false` or an `error`
/// field is a failure even on 2xx.
pub fn decode_mutation(status: u16, body: &str) -> Result<(), ApiError> {
    if !is_success(status) {
        return Err(failure(status, body));
    }
    if body.trim().is_empty() {
        return Ok(());
    }
    let parsed: MutationResponse = serde_json::from_str(body)?;
    match (parsed.success, parsed.error.filter(|m| !m.is_empty())) {
        (_, Some(message)) => Err(ApiError::Rejected(message)),
        (Some(false), None) => Err(ApiError::Rejected(REJECTED_FALLBACK_TEXT.to_string())),
        _ => Ok(()),
    }
}

/// Chat answers carry `{error}` on 4xx/5xx too, so the body is read regardless of status.
pub fn decode_chat_reply(status: u16, body: &str) -> Result<ChatReply, ApiError> {
    match serde_json::from_str::<ChatReply>(body) {
        Ok(reply) if reply.reply.is_some() || reply.error.is_some() => Ok(reply),
        Ok(reply) if is_success(status) => Ok(reply),
        Ok(_) => Err(ApiError::Http { status, message: None }),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Goal, Stats};

    #[test]
    fn test_decode_list() {
        let body = r#"[{"id":1,"name":"General","count":2},{"id":2,"name":"Work"}]"#;
        let categories: Vec<Category> = decode(200, body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].count, 0);
    }

    #[test]
    fn test_decode_shape_mismatch_is_parse_error() {
        let err = decode::<Vec<Goal>>(200, r#"{"goals": []}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));

        let err = decode::<Vec<Goal>>(200, "<html>login</html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_decode_unknown_status_is_parse_error() {
        let body = r#"[{"id":1,"title":"x","status":"snoozed"}]"#;
        assert!(matches!(decode::<Vec<Goal>>(200, body), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_decode_http_failure() {
        let err = decode::<Stats>(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500, message: None });

        let err = decode::<Stats>(403, r#"{"error":"Unauthorized"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Unauthorized".into()));
    }

    #[test]
    fn test_decode_stats() {
        let body = r#"{
            "kpi": {"total": 10, "completed": 4, "win_rate": 40.0},
            "pie_category": {"labels": ["Work", "General"], "data": [3, 7]},
            "pie_status": {"labels": ["Pending", "Completed"], "data": [6, 4]},
            "bar": {"labels": ["Mon","Tue","Wed","Thu","Fri","Sat","Sun"], "data": [0,1,0,2,0,0,1]}
        }"#;
        let stats: Stats = decode(200, body).unwrap();
        assert_eq!(stats.kpi.unwrap().completed, 4);
        assert_eq!(stats.bar.labels.len(), 7);
        assert_eq!(stats.pie_category.data, vec![3.0, 7.0]);
    }

    #[test]
    fn test_decode_mutation() {
        assert_eq!(decode_mutation(200, r#"{"success": true, "id": 3}"#), Ok(()));
        assert_eq!(decode_mutation(200, ""), Ok(()));
        assert_eq!(decode_mutation(200, "{}"), Ok(()));
        assert_eq!(
            decode_mutation(200, r#"{"success": false, "error": "Duplicate"}"#),
            Err(ApiError::Rejected("Duplicate".into()))
        );
        assert_eq!(
            decode_mutation(400, r#"{"error": "Title is required"}"#),
            Err(ApiError::Rejected("Title is required".into()))
        );
    }

    #[test]
    fn test_unsuccessful_mutation_without_error_text() {
        assert_eq!(
            decode_mutation(200, r#"{"success": false}"#),
            Err(ApiError::Rejected(REJECTED_FALLBACK_TEXT.into()))
        );
        assert_eq!(decode_mutation(200, r#"{"success": true}"#), Ok(()));
    }

    #[test]
    fn test_decode_chat_reply() {
        let ok = decode_chat_reply(200, r#"{"reply": "Break it into steps."}"#).unwrap();
        assert_eq!(ok.reply.as_deref(), Some("Break it into steps."));

        let server_err = decode_chat_reply(500, r#"{"error": "Server missing API Key"}"#).unwrap();
        assert_eq!(server_err.error.as_deref(), Some("Server missing API Key"));

        assert!(matches!(decode_chat_reply(502, "{}"), Err(ApiError::Http { status: 502, .. })));
        assert!(matches!(decode_chat_reply(502, "Bad Gateway"), Err(ApiError::Parse(_))));
    }
}
