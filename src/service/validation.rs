//! Request validation against per-field rules.

use crate::error::AppError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub minimum: Option<i64>,
}

impl FieldRule {
    const fn text(name: &'static str, max_length: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            min_length: Some(1),
            max_length: Some(max_length),
            minimum: None,
        }
    }

    const fn integer(name: &'static str, minimum: Option<i64>) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            min_length: None,
            max_length: None,
            minimum,
        }
    }
}

/// Rules for every column of `books`.
pub const BOOK_RULES: &[FieldRule] = &[
    FieldRule::text("isbn", 64),
    FieldRule::text("amazon_url", 2048),
    FieldRule::text("author", 512),
    FieldRule::text("language", 512),
    FieldRule::integer("pages", Some(0)),
    FieldRule::text("publisher", 512),
    FieldRule::text("title", 512),
    FieldRule::integer("year", None),
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against rules. All fields are required and unknown fields are rejected.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        reject_unknown(body, rules)?;
        for rule in rules {
            match body.get(rule.name) {
                None => return Err(AppError::Validation(format!("{} is required", rule.name))),
                Some(v) => validate_field(v, rule)?,
            }
        }
        Ok(())
    }

    /// Validate only the fields present in body (for PUT).
    pub fn validate_partial(
        body: &Map<String, Value>,
        rules: &[FieldRule],
    ) -> Result<(), AppError> {
        reject_unknown(body, rules)?;
        for rule in rules {
            if let Some(v) = body.get(rule.name) {
                validate_field(v, rule)?;
            }
        }
        Ok(())
    }
}

/// Parse a request body as a JSON object.
pub fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("request body is empty".into()));
    }
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON: {}", e)))?;
    body_to_map(value)
}

pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn reject_unknown(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
    match body.keys().find(|k| !rules.iter().any(|r| r.name == k.as_str())) {
        Some(k) => Err(AppError::Validation(format!("unknown field '{}'", k))),
        None => Ok(()),
    }
}

fn validate_field(v: &Value, rule: &FieldRule) -> Result<(), AppError> {
    let col = rule.name;
    match rule.kind {
        FieldKind::Text => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", col)))?;
            let len = s.chars().count();
            if let Some(min) = rule.min_length {
                if len < min {
                    return Err(AppError::Validation(format!(
                        "{} must be at least {} characters",
                        col, min
                    )));
                }
            }
            if let Some(max) = rule.max_length {
                if len > max {
                    return Err(AppError::Validation(format!(
                        "{} must be at most {} characters",
                        col, max
                    )));
                }
            }
        }
        FieldKind::Integer => {
            let n = v
                .as_i64()
                .filter(|n| i32::try_from(*n).is_ok())
                .ok_or_else(|| AppError::Validation(format!("{} must be a 32-bit integer", col)))?;
            if let Some(min) = rule.minimum {
                if n < min {
                    return Err(AppError::Validation(format!("{} must be at least {}", col, min)));
                }
            }
        }
    }
    Ok(())
}
