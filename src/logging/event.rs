//! Immutable log events and their structured properties.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::LogLevel;

/// A named structured value attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single emitted log event.
///
/// Properties keep insertion order. Context properties come first, event
/// properties after them, so a later entry with the same name wins on lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    message_template: String,
    properties: Vec<Property>,
}

impl LogEvent {
    pub fn new(
        level: LogLevel,
        message_template: impl Into<String>,
        properties: Vec<Property>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message_template: message_template.into(),
            properties,
        }
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message_template(&self) -> &str {
        &self.message_template
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks up a property by name, preferring the most recently added.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Renders the template, replacing `{Name}` holes with property values.
    ///
    /// Strings render without quotes. Unknown holes are left as written.
    pub fn render(&self) -> String {
        let template = self.message_template.as_str();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match self.property(name) {
                        Some(value) => out.push_str(&render_value(value)),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
