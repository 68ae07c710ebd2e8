//! Request shaping.
//!
//! Each operation picks one [`RequestShape`] describing how the argument bag
//! left after path parameters are consumed becomes query pairs and/or a JSON
//! body for the upstream call.

use rmcp::model::JsonObject;
use serde_json::{Value, json};

/// How the remaining arguments are turned into the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// Path parameters only; nothing else is sent.
    Empty,
    /// Every remaining argument becomes a query parameter.
    Query,
    /// The remaining arguments are the JSON body, untouched.
    Body,
    /// The body is the value of a single argument.
    Nested(&'static str),
    /// A single object argument is wrapped into a one-element list.
    Wrap {
        from: &'static str,
        into: &'static str,
    },
    /// An existing list is forwarded under the same key, bounded in size.
    Bulk { field: &'static str, max: usize },
    /// Only the listed keys are copied, and only when actually supplied.
    Select(&'static [&'static str]),
    /// The remaining arguments are the JSON body, except that the listed
    /// optional keys are dropped unless actually supplied.
    Prune(&'static [&'static str]),
    /// `options` (default `{}`) and the required `subject` object, plus any
    /// other top-level arguments unchanged.
    Merge {
        options: &'static str,
        subject: &'static str,
    },
}

/// Query pairs and body produced by a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Payload {
    fn body(body: Value) -> Self {
        Self {
            query: Vec::new(),
            body: Some(body),
        }
    }
}

impl RequestShape {
    /// Apply the shape. Errors are human readable validation messages.
    pub fn apply(&self, mut args: JsonObject) -> Result<Payload, String> {
        match *self {
            Self::Empty => Ok(Payload::default()),
            Self::Query => Ok(Payload {
                query: to_query(args),
                body: None,
            }),
            Self::Body => Ok(Payload::body(Value::Object(args))),
            Self::Nested(key) => take(&mut args, key).map(Payload::body),
            Self::Wrap { from, into } => {
                let item = take(&mut args, from)?;
                if !item.is_object() {
                    return Err(format!("'{from}' must be an object"));
                }
                Ok(Payload::body(json!({ into: [item] })))
            }
            Self::Bulk { field, max } => match take(&mut args, field)? {
                Value::Array(items) if items.is_empty() => {
                    Err(format!("'{field}' must contain at least one item"))
                }
                Value::Array(items) if items.len() > max => Err(format!(
                    "'{field}' accepts at most {max} items, got {}",
                    items.len()
                )),
                Value::Array(items) => Ok(Payload::body(json!({ field: items }))),
                _ => Err(format!("'{field}' must be an array")),
            },
            Self::Select(keys) => {
                let mut body = JsonObject::new();
                for key in keys {
                    if let Some(value) = args.remove(*key).filter(is_supplied) {
                        body.insert((*key).to_string(), value);
                    }
                }
                Ok(Payload::body(Value::Object(body)))
            }
            Self::Prune(keys) => {
                for key in keys {
                    if !args.get(*key).is_some_and(is_supplied) {
                        args.remove(*key);
                    }
                }
                Ok(Payload::body(Value::Object(args)))
            }
            Self::Merge { options, subject } => {
                let options_value = args
                    .remove(options)
                    .filter(|v| !v.is_null())
                    .unwrap_or_else(|| json!({}));
                let subject_value = take(&mut args, subject)?;
                args.insert(options.to_string(), options_value);
                args.insert(subject.to_string(), subject_value);
                Ok(Payload::body(Value::Object(args)))
            }
        }
    }
}

/// Remove a required argument, rejecting absent or `null` values.
fn take(args: &mut JsonObject, key: &str) -> Result<Value, String> {
    args.remove(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| format!("missing required argument '{key}'"))
}

/// Supplied means present, not `null` and not an empty string.
fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Flatten an argument bag into query pairs. Arrays repeat their key,
/// objects are sent as JSON text and `null` is dropped.
fn to_query(args: JsonObject) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in args {
        match value {
            Value::Array(items) => {
                pairs.extend(
                    items
                        .into_iter()
                        .filter_map(query_value)
                        .map(|v| (key.clone(), v)),
                );
            }
            other => {
                if let Some(v) = query_value(other) {
                    pairs.push((key, v));
                }
            }
        }
    }
    pairs
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
