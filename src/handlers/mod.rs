//! Handler logic shared by the Lambda binaries, behind the
//! API-Gateway proxy response shape.

pub mod create;
pub mod list;

use serde::Serialize;
use serde_json::json;

/// Message returned when nothing more specific is known, and the only
/// thing `get_tasks` ever tells a caller about a failure.
pub const GENERIC_ERROR: &str = "Internal Server Error";

/// API-Gateway proxy response: a status code plus a pre-serialized body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// 200 with `value` serialized as the body.
    pub fn ok<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(err) => Self::error(500, &err.to_string()),
        }
    }

    /// `{"error": message}` under the given status.
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: json!({ "error": message }).to_string(),
        }
    }
}
