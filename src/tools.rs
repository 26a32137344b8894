//! Tool definitions and dispatch for the request loop
//!
//! Requests are newline-delimited JSON objects with `id`, `method` and
//! optional `params`. `tools/list` returns the definitions below and
//! `tools/call` runs one tool, answering with text content plus an error flag.

use crate::error::ScoutError;
use crate::service::{CheckAvailabilityRequest, DomainScout, ExploreDeepRequest, SuggestRequest};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SUGGEST: &str = "suggest";
pub const CHECK_AVAILABILITY: &str = "checkAvailability";
pub const EXPLORE_DEEP: &str = "exploreDeep";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

/// Tool definition with a JSON Schema for its arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Definitions returned by `tools/list`
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            SUGGEST,
            "Suggest domain names for a business description, scored and optionally checked for availability.",
            json!({
                "type": "object",
                "properties": {
                    "description": {
                        "type": "string",
                        "description": "What the business or project does"
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["standard", "competitive", "premium", "budget", "international"],
                        "default": "standard",
                        "description": "Which base TLD list to draw from"
                    },
                    "maxSuggestions": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 50,
                        "default": 20
                    },
                    "checkAvailability": {
                        "type": "boolean",
                        "default": true
                    }
                },
                "required": ["description"]
            }),
        ),
        ToolDefinition::new(
            CHECK_AVAILABILITY,
            "Check registration availability for one domain or a list of up to 20 domains.",
            json!({
                "type": "object",
                "properties": {
                    "domain": {
                        "type": "string",
                        "description": "Single domain to check"
                    },
                    "domains": {
                        "type": "array",
                        "items": { "type": "string" },
                        "minItems": 1,
                        "maxItems": 20,
                        "description": "Domains to check in batches"
                    }
                }
            }),
        ),
        ToolDefinition::new(
            EXPLORE_DEEP,
            "Explore the full TLD catalog in randomized batches and report standout names.",
            json!({
                "type": "object",
                "properties": {
                    "description": { "type": "string" },
                    "keywords": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Overrides keywords extracted from the description"
                    },
                    "batchSize": {
                        "type": "integer",
                        "minimum": 10,
                        "maximum": 500,
                        "default": 50
                    },
                    "maxBatches": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 20,
                        "default": 10
                    },
                    "creativityLevel": {
                        "type": "string",
                        "enum": ["conservative", "moderate", "wild"],
                        "default": "moderate"
                    },
                    "checkAvailability": {
                        "type": "boolean",
                        "default": false
                    }
                },
                "required": ["description"]
            }),
        ),
    ]
}

/// One block of tool output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Result of `tools/call`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub content: Vec<ToolContent>,
    pub is_error: bool,
}

impl ToolResponse {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text,
            }],
            is_error,
        }
    }

    pub fn success<T: Serialize>(data: &T) -> Self {
        match serde_json::to_string_pretty(data) {
            Ok(text) => Self::text(text, false),
            Err(e) => Self::error(&ScoutError::from(e)),
        }
    }

    pub fn error(err: &ScoutError) -> Self {
        Self::text(err.user_message(), true)
    }

    /// Text of the first content block
    pub fn first_text(&self) -> &str {
        self.content.first().map_or("", |c| c.text.as_str())
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, ScoutError> {
    let arguments = if arguments.is_null() { json!({}) } else { arguments };
    serde_json::from_value(arguments)
        .map_err(|e| ScoutError::validation(format!("Invalid arguments: {}", e)))
}

/// Run one tool. Failures come back as error responses, never as panics.
pub async fn call_tool(scout: &DomainScout, name: &str, arguments: Value) -> ToolResponse {
    tracing::debug!(tool = %name, "Tool call received");

    let outcome = match name {
        SUGGEST => match parse_args::<SuggestRequest>(arguments) {
            Ok(request) => scout.suggest(&request).await.map(|r| ToolResponse::success(&r)),
            Err(e) => Err(e),
        },
        CHECK_AVAILABILITY => match parse_args::<CheckAvailabilityRequest>(arguments) {
            Ok(request) => scout
                .check_availability(&request)
                .await
                .map(|r| ToolResponse::success(&r)),
            Err(e) => Err(e),
        },
        EXPLORE_DEEP => match parse_args::<ExploreDeepRequest>(arguments) {
            Ok(request) => scout.explore_deep(&request).await.map(|r| ToolResponse::success(&r)),
            Err(e) => Err(e),
        },
        other => Err(ScoutError::validation(format!("Unknown tool: {}", other))),
    };

    outcome.unwrap_or_else(|e| {
        if e.is_validation() {
            tracing::debug!(tool = %name, error = %e, "Tool call rejected");
        } else {
            tracing::warn!(tool = %name, error = %e, "Tool call failed");
        }
        ToolResponse::error(&e)
    })
}

fn rpc_result(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn rpc_error(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message.into() } })
}

/// Handle one request line, returning the response object.
///
/// Requests without an `id` are notifications and get no response.
pub async fn handle_line(scout: &DomainScout, line: &str) -> Option<Value> {
    let request: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => return Some(rpc_error(Value::Null, PARSE_ERROR, format!("Parse error: {}", e))),
    };

    let id = request.get("id").cloned();
    let Some(method) = request.get("method").and_then(Value::as_str) else {
        return Some(rpc_error(id.unwrap_or(Value::Null), INVALID_REQUEST, "Missing method"));
    };
    let id = id?;

    let response = match method {
        "tools/list" => rpc_result(id, json!({ "tools": tool_definitions() })),
        "tools/call" => {
            let params = request.get("params").cloned().unwrap_or(Value::Null);
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return Some(rpc_error(id, INVALID_PARAMS, "tools/call requires params.name"));
            };
            let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
            let response = call_tool(scout, name, arguments).await;
            match serde_json::to_value(&response) {
                Ok(value) => rpc_result(id, value),
                Err(e) => rpc_error(id, INVALID_PARAMS, e.to_string()),
            }
        }
        other => rpc_error(id, METHOD_NOT_FOUND, format!("Method not found: {}", other)),
    };

    Some(response)
}
