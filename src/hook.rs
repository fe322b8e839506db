//! Request/response plumbing around the rule table.
//!
//! The hook is fail-open: anything that goes wrong while reading the request
//! collapses to a bare approval so the surrounding edit is never blocked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::rules;

/// First line of the advisory message.
const MESSAGE_HEADER: &str = "iOS Best Practices:";

/// Anything that prevents the request from being understood.
#[derive(Debug, Error)]
pub enum HookError {
    /// Standard input could not be read.
    #[error("failed to read hook input: {0}")]
    Read(#[from] std::io::Error),

    /// Malformed JSON, or a field with the wrong type.
    #[error("invalid hook input: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload or `tool_input` was valid JSON but not an object.
    #[error("`{0}` is not a JSON object")]
    NotAnObject(&'static str),
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The parts of `tool_input` this hook cares about. Write calls carry
/// `content`, Edit calls carry `new_string`; missing or `null` fields read as
/// empty and unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    file_path: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    new_string: Option<String>,
}

impl ToolInput {
    pub fn file_path(&self) -> &str {
        self.file_path.as_deref().unwrap_or("")
    }

    /// `content` if non-empty, otherwise `new_string`, otherwise `""`.
    pub fn text(&self) -> &str {
        match self.content.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => self.new_string.as_deref().unwrap_or(""),
        }
    }
}

/// Parse the raw hook payload and pull out `tool_input`.
pub fn parse_tool_input(raw: &str) -> Result<ToolInput, HookError> {
    let data: Value = serde_json::from_str(raw)?;

    let payload = data.as_object().ok_or(HookError::NotAnObject("payload"))?;

    match payload.get("tool_input") {
        None | Some(Value::Null) => Ok(ToolInput::default()),
        // Checked up front so an array is not accepted as a positional struct.
        Some(v @ Value::Object(_)) => Ok(ToolInput::deserialize(v)?),
        Some(_) => Err(HookError::NotAnObject("tool_input")),
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookResponse {
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HookResponse {
    pub fn approve() -> Self {
        Self {
            decision: Decision::Approve,
            message: None,
        }
    }

    /// Approve, attaching the advisories as a bulleted message if there are any.
    pub fn with_advisories(advisories: &[&str]) -> Self {
        if advisories.is_empty() {
            return Self::approve();
        }

        let bullets: Vec<String> = advisories.iter().map(|a| format!("- {}", a)).collect();

        Self {
            decision: Decision::Approve,
            message: Some(format!("{}\n{}", MESSAGE_HEADER, bullets.join("\n"))),
        }
    }

    pub fn to_json(&self) -> String {
        // Only a unit enum and an optional string; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"decision":"approve"}"#.to_string())
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Evaluate an already-parsed tool input.
pub fn respond(input: &ToolInput) -> HookResponse {
    let file_path = input.file_path();
    let advisories = rules::evaluate(file_path, input.text());
    debug!(file_path, advisories = advisories.len(), "evaluated edit");

    HookResponse::with_advisories(&advisories)
}

/// Turn a raw stdin payload into the response to print. Never fails.
pub fn run(raw: &str) -> HookResponse {
    match parse_tool_input(raw) {
        Ok(input) => respond(&input),
        Err(e) => recover(e),
    }
}

/// Map any input error to a bare approval.
pub fn recover(error: HookError) -> HookResponse {
    warn!(error = %error, "ignoring unreadable hook input");
    HookResponse::approve()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
